//! Email and password authentication against a relational credential store.
//!
//! [`Authenticator::authenticate`] answers whether a `User` row matches both
//! the submitted email and password. Passwords are stored and compared as
//! plaintext; see [`auth::PlaintextVerifier`].

pub mod auth;
pub mod config;
pub mod error;
pub mod prompt;
pub mod store;
pub mod utils;

pub use auth::Authenticator;
pub use config::AppConfig;
pub use error::{AuthError, StoreError};
pub use store::{CredentialStore, MemoryCredentialStore, SqlCredentialStore, UserRecord};
