//! Utilities
//!
//! Process-level helpers used by the login binary.

pub mod logging;

pub use logging::setup_logging;
