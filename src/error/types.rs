//! Error types
//!
//! Separates operational faults from business outcomes. A credential
//! mismatch is never an error; only failures to consult the store are.

use std::fmt;
use std::io;

/// Credential store faults
#[derive(Debug)]
pub enum StoreError {
    /// The store could not be reached (connect, io, tls, closed pool).
    Unavailable(String),
    /// No pooled connection became available in time.
    Timeout,
    /// The store rejected or failed the query.
    Query(String),
    /// The store answered with rows that do not have the expected shape.
    MalformedResponse(String),
}

impl StoreError {
    /// True for faults caused by the store being unreachable rather than by the query itself.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Timeout)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(e) => write!(f, "Credential store unavailable: {}", e),
            StoreError::Timeout => write!(f, "Timed out waiting for a store connection"),
            StoreError::Query(e) => write!(f, "Credential query failed: {}", e),
            StoreError::MalformedResponse(e) => write!(f, "Malformed store response: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => StoreError::Timeout,
            sqlx::Error::Io(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::Tls(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::Configuration(e) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::PoolClosed => StoreError::Unavailable("connection pool closed".into()),
            sqlx::Error::WorkerCrashed => {
                StoreError::Unavailable("database worker crashed".into())
            }
            e @ (sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. }) => StoreError::MalformedResponse(e.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Authentication faults
///
/// Rejected credentials are reported through `AuthOutcome`, not here.
#[derive(Debug)]
pub enum AuthError {
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Store(e) => write!(f, "Authentication unavailable: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Store(e) => Some(e),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        AuthError::Store(error)
    }
}

/// Top-level error for the login binary
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Auth(AuthError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Auth(e) => write!(f, "{}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::Auth(AuthError::Store(error))
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
