//! Driven port for the issued-token map.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::identity::Identity;
use crate::domain::token::AuthToken;

/// Store-side record bound to one issued token.
///
/// `issued_at` exists for observability only; tokens in this model carry
/// no expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// Identity the token resolves to.
    pub identity: Identity,
    /// Issuance timestamp.
    pub issued_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Build a record binding an identity to its issuance time.
    pub const fn new(identity: Identity, issued_at: DateTime<Utc>) -> Self {
        Self {
            identity,
            issued_at,
        }
    }
}

/// Errors raised by token storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenRepositoryError {
    /// The backing store failed to read or write.
    #[error("token store failed: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
    },
    /// The minted token collides with one already stored.
    #[error("token is already bound to an identity")]
    DuplicateToken,
}

impl TokenRepositoryError {
    /// Construct a [`TokenRepositoryError::Storage`] error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Port for recording and resolving issued tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Bind a freshly minted token to its record.
    ///
    /// Fails with [`TokenRepositoryError::DuplicateToken`] when the token is
    /// already bound. This is the uniqueness backstop behind generator
    /// contracts.
    async fn insert(
        &self,
        token: AuthToken,
        record: TokenRecord,
    ) -> Result<(), TokenRepositoryError>;

    /// Resolve a token to its record, if the token is currently valid.
    async fn resolve(&self, token: &AuthToken)
        -> Result<Option<TokenRecord>, TokenRepositoryError>;

    /// Invalidate every issued token.
    async fn clear(&self) -> Result<(), TokenRepositoryError>;
}
