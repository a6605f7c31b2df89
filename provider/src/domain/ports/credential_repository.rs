//! Driven port for credential storage.
//!
//! The store is pure lookup: it maps usernames to stored passwords and
//! carries no comparison or policy logic. The token authority owns the
//! exact-match rule; adapters only persist and retrieve.

use async_trait::async_trait;

use crate::domain::auth::{LoginCredentials, Password};
use crate::domain::identity::Username;

/// Errors raised by credential storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialRepositoryError {
    /// The backing store failed to read or write.
    #[error("credential store failed: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
    },
}

impl CredentialRepositoryError {
    /// Construct a [`CredentialRepositoryError::Storage`] error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Port for registering and looking up stored credentials.
///
/// Registration is a setup-time operation; re-registering a username
/// replaces the stored password. Lookups never fail on unknown usernames;
/// absence is an ordinary `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Store (or replace) the password for the credentials' username.
    async fn register(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<(), CredentialRepositoryError>;

    /// Fetch the stored password for a username, if one is registered.
    async fn lookup(
        &self,
        username: &Username,
    ) -> Result<Option<Password>, CredentialRepositoryError>;

    /// Discard every stored credential.
    async fn clear(&self) -> Result<(), CredentialRepositoryError>;
}
