//! Password comparison
//!
//! The stored password column holds plaintext and is compared verbatim.
//! This is a known weak scheme kept for compatibility with the existing
//! `User` table. A salted-hash verifier can replace [`PlaintextVerifier`]
//! without changing the [`Authenticator`](super::Authenticator) contract.

/// Compares a submitted password with the value held by the store.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, submitted: &str, stored: &str) -> bool;
}

/// Exact byte-for-byte equality. No hashing, no normalisation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl PasswordVerifier for PlaintextVerifier {
    fn verify(&self, submitted: &str, stored: &str) -> bool {
        submitted.as_bytes() == stored.as_bytes()
    }
}
