//! SQL credential store
//!
//! Runs the credential lookup against a relational `User` table through an
//! `sqlx` Any pool, so the same code serves SQLite and MySQL. Both drivers
//! use `?` placeholders; values are always bound, never spliced into SQL.

use async_trait::async_trait;
use log::{debug, info};
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use super::{CredentialStore, UserRecord};
use crate::config::StoreConfig;
use crate::error::StoreError;

const FIND_USER_QUERY: &str = "SELECT Email, Password FROM User WHERE Email = ? AND Password = ?";
const PING_QUERY: &str = "SELECT 1";
const SQLITE_SCHEMA_QUERY: &str = "CREATE TABLE IF NOT EXISTS User (\
     Email TEXT NOT NULL UNIQUE, \
     Password TEXT NOT NULL)";
// MySQL cannot index a whole TEXT column; the unique key covers a prefix
const MYSQL_SCHEMA_QUERY: &str = "CREATE TABLE IF NOT EXISTS User (\
     Email TEXT NOT NULL, \
     Password TEXT NOT NULL, \
     UNIQUE KEY user_email (Email(255)))";

pub struct SqlCredentialStore {
    pool: AnyPool,
    schema_query: &'static str,
}

impl SqlCredentialStore {
    /// Open a pool and establish the first connection immediately.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        sqlx::any::install_default_drivers();

        let pool = Self::pool_options(config)
            .connect(&config.database_url)
            .await
            .map_err(acquire_fault)?;

        info!(
            "Connected to credential store (max {} connections)",
            config.max_connections
        );
        Ok(Self {
            pool,
            schema_query: schema_query(&config.database_url),
        })
    }

    /// Build a pool without connecting; the first lookup opens the connection.
    pub fn connect_lazy(config: &StoreConfig) -> Result<Self, StoreError> {
        sqlx::any::install_default_drivers();

        let pool = Self::pool_options(config)
            .connect_lazy(&config.database_url)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            pool,
            schema_query: schema_query(&config.database_url),
        })
    }

    fn pool_options(config: &StoreConfig) -> AnyPoolOptions {
        AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
    }

    /// Create the `User` table if it does not exist. Never touches rows.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await.map_err(acquire_fault)?;
        sqlx::query(self.schema_query).execute(&mut *conn).await?;
        debug!("Credential schema ready");
        Ok(())
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CredentialStore for SqlCredentialStore {
    async fn find_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        // Returned to the pool when `conn` drops, on every path out of here
        let mut conn = self.pool.acquire().await.map_err(acquire_fault)?;

        let record = sqlx::query_as::<_, UserRecord>(FIND_USER_QUERY)
            .bind(email)
            .bind(password)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(record)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await.map_err(acquire_fault)?;
        sqlx::query(PING_QUERY).execute(&mut *conn).await?;
        Ok(())
    }
}

fn schema_query(database_url: &str) -> &'static str {
    if database_url.starts_with("mysql:") {
        MYSQL_SCHEMA_QUERY
    } else {
        SQLITE_SCHEMA_QUERY
    }
}

/// Failing to obtain a connection is a reachability fault whatever the driver reports.
fn acquire_fault(error: sqlx::Error) -> StoreError {
    match error {
        sqlx::Error::PoolTimedOut => StoreError::Timeout,
        other => StoreError::Unavailable(other.to_string()),
    }
}
