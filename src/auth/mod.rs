//! Authentication system
//!
//! Decides the verdict for a login attempt against the credential store.

pub mod authenticator;
pub mod results;
pub mod verifier;

pub use authenticator::Authenticator;
pub use results::{AuthOutcome, LoginAttempt, RejectReason};
pub use verifier::{PasswordVerifier, PlaintextVerifier};
