//! Authenticator
//!
//! Turns a login attempt into a verdict. Stateless: every call issues one
//! read-only lookup against the credential store and shares nothing with
//! concurrent calls.

use log::{debug, error, info, warn};

use super::results::{AuthOutcome, LoginAttempt, RejectReason};
use super::verifier::{PasswordVerifier, PlaintextVerifier};
use crate::error::AuthError;
use crate::store::CredentialStore;

pub struct Authenticator<S, V = PlaintextVerifier> {
    store: S,
    verifier: V,
}

impl<S: CredentialStore> Authenticator<S> {
    /// Authenticator comparing passwords verbatim.
    pub fn new(store: S) -> Self {
        Self::with_verifier(store, PlaintextVerifier)
    }
}

impl<S: CredentialStore, V: PasswordVerifier> Authenticator<S, V> {
    pub fn with_verifier(store: S, verifier: V) -> Self {
        Self { store, verifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns `Ok(true)` iff a stored record matches both email and password.
    ///
    /// Wrong, empty, or injection-style credentials yield `Ok(false)`. `Err`
    /// means the store could not answer and says nothing about the credentials.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let attempt = LoginAttempt::new(email, password);
        Ok(self.check(&attempt).await?.is_authenticated())
    }

    /// Same decision as [`authenticate`](Self::authenticate), as an [`AuthOutcome`].
    pub async fn check(&self, attempt: &LoginAttempt) -> Result<AuthOutcome, AuthError> {
        debug!("Login attempt for {:?}", attempt.email);

        let record = match self
            .store
            .find_user(&attempt.email, &attempt.password)
            .await
        {
            Ok(record) => record,
            Err(e) => {
                error!("Credential lookup for {:?} failed: {}", attempt.email, e);
                return Err(AuthError::Store(e));
            }
        };

        // Stores with case-insensitive collations may return near matches
        let matched = record.is_some_and(|record| {
            record.email == attempt.email
                && self.verifier.verify(&attempt.password, &record.password)
        });

        if matched {
            info!("User {:?} authenticated", attempt.email);
            Ok(AuthOutcome::Authenticated {
                email: attempt.email.clone(),
            })
        } else {
            warn!("Invalid email or password for {:?}", attempt.email);
            Ok(AuthOutcome::Rejected(RejectReason::NoMatch))
        }
    }
}
