//! In-memory credential store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::auth::{LoginCredentials, Password};
use crate::domain::identity::Username;
use crate::domain::ports::{CredentialRepository, CredentialRepositoryError};

/// Username-to-password map guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    users: RwLock<HashMap<Username, Password>>,
}

impl InMemoryCredentialRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn register(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<(), CredentialRepositoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| CredentialRepositoryError::storage("credential lock poisoned"))?;
        let replaced = users
            .insert(
                credentials.username().clone(),
                credentials.password().clone(),
            )
            .is_some();
        debug!(username = %credentials.username(), replaced, "stored credentials");
        Ok(())
    }

    async fn lookup(
        &self,
        username: &Username,
    ) -> Result<Option<Password>, CredentialRepositoryError> {
        let users = self
            .users
            .read()
            .map_err(|_| CredentialRepositoryError::storage("credential lock poisoned"))?;
        Ok(users.get(username).cloned())
    }

    async fn clear(&self) -> Result<(), CredentialRepositoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| CredentialRepositoryError::storage("credential lock poisoned"))?;
        let dropped = users.len();
        users.clear();
        debug!(dropped, "cleared credential store");
        Ok(())
    }
}
