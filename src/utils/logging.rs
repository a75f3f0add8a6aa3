//! Logging utilities
//!
//! Provides logging setup for the login binary. Library code only emits
//! through the `log` macros.

use env_logger::Env;

const DEFAULT_FILTER: &str = "info";

/// Setup logging, honouring RUST_LOG when set
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).init();
}
