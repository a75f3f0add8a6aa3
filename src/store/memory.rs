//! In-memory credential store
//!
//! Holds a fixed table of users built once from seed records. Useful for
//! embedding and tests; it answers lookups with the same equality
//! semantics as the SQL query.

use async_trait::async_trait;
use std::collections::HashMap;

use super::{CredentialStore, UserRecord};
use crate::error::StoreError;

#[derive(Debug, Default, Clone)]
pub struct MemoryCredentialStore {
    users: HashMap<String, String>,
}

impl MemoryCredentialStore {
    /// Build the table from seed records. Later duplicates of an email replace earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let users = records
            .into_iter()
            .map(|record| (record.email, record.password))
            .collect();
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        Ok(match self.users.get(email) {
            Some(stored) if stored == password => Some(UserRecord::new(email, stored.as_str())),
            _ => None,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
