//! Configuration management for the login service
//!
//! Store location and pool limits are passed explicitly to the components
//! that need them; nothing here is process-wide state.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

/// Complete login service configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub store: StoreConfig,
}

/// Credential store connection settings
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// `sqlite:` or `mysql:` connection URL
    /// Environment: LOGIN_AUTH__STORE__DATABASE_URL
    pub database_url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// How long a login attempt may wait for a pooled connection
    pub acquire_timeout_secs: u64,

    /// Create the `User` table on startup if it is missing
    pub create_schema: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://users.db?mode=rwc".to_string(),
            max_connections: 4,
            acquire_timeout_secs: 5,
            create_schema: true,
        }
    }
}

const ENV_PREFIX: &str = "LOGIN_AUTH";
const ENV_SEPARATOR: &str = "__";

/// Installed layout first, then the working directory
pub const CONFIG_PATHS: [&str; 2] = ["login-auth/config", "config"];

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(&CONFIG_PATHS)
    }

    /// Load the first readable config file among `config_paths` (extension optional),
    /// then apply `LOGIN_AUTH__SECTION__KEY` environment overrides.
    pub fn load_from<P: AsRef<str>>(config_paths: &[P]) -> Result<Self, config::ConfigError> {
        let mut last_error = None;

        for config_path in config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path.as_ref()))
                .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
                .build()
            {
                Ok(settings) => {
                    let config: AppConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        let tried: Vec<&str> = config_paths.iter().map(|p| p.as_ref()).collect();
        Err(config::ConfigError::Message(format!(
            "Failed to load config.toml from any location. Tried: {tried:?}. Last error: {last_error:?}"
        )))
    }

    /// Load configuration from an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        // Checked as given: the store connects with this exact string
        let url = self.store.database_url.as_str();
        if url.is_empty() {
            return Err(config::ConfigError::Message(
                "store.database_url cannot be empty".into(),
            ));
        }

        if url.trim() != url {
            return Err(config::ConfigError::Message(
                "store.database_url must not have leading or trailing whitespace".into(),
            ));
        }

        if !(url.starts_with("sqlite:") || url.starts_with("mysql:")) {
            return Err(config::ConfigError::Message(format!(
                "store.database_url must use the sqlite: or mysql: scheme, got {url:?}"
            )));
        }

        if self.store.max_connections == 0 {
            return Err(config::ConfigError::Message(
                "store.max_connections must be greater than 0".into(),
            ));
        }

        if self.store.acquire_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "store.acquire_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl StoreConfig {
    /// Store config pointing at the given URL, other values defaulted
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Get the connection acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
