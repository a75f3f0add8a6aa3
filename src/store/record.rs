//! Stored user record

use std::fmt;

/// Row of the `User` table. Created out of band and never modified here.
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    #[sqlx(rename = "Email")]
    pub email: String,
    /// Stored verbatim; see [`crate::auth::PlaintextVerifier`].
    #[sqlx(rename = "Password")]
    pub password: String,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
