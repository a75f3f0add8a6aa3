//! Error handlers
//!
//! Logs errors and maps them to process exit codes.

use crate::error::types::{AppError, AuthError};
use log::error;

pub const EXIT_LOGIN_SUCCESS: u8 = 0;
pub const EXIT_LOGIN_REJECTED: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_STORE_FAULT: u8 = 3;
pub const EXIT_IO_ERROR: u8 = 4;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Login service error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => EXIT_CONFIG_ERROR,
        AppError::Auth(AuthError::Store(_)) => EXIT_STORE_FAULT,
        AppError::Io(_) => EXIT_IO_ERROR,
    }
}
