//! Credential store
//!
//! The persisted collection of user records consulted for authentication,
//! reached through a single parameterized equality lookup.

pub mod memory;
pub mod record;
pub mod sql;

use async_trait::async_trait;

use crate::error::StoreError;

pub use memory::MemoryCredentialStore;
pub use record::UserRecord;
pub use sql::SqlCredentialStore;

/// Read-only access to user records.
///
/// `find_user` separates the two outcomes the authenticator must not
/// conflate: `Ok(None)` is a normal "no match", `Err` is a store fault.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up the record whose email and password both equal the given values.
    async fn find_user(&self, email: &str, password: &str)
    -> Result<Option<UserRecord>, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
