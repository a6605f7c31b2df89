//! In-memory issued-token map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{TokenRecord, TokenRepository, TokenRepositoryError};
use crate::domain::token::AuthToken;

/// Token-to-record map guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<AuthToken, TokenRecord>>,
}

impl InMemoryTokenRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn insert(
        &self,
        token: AuthToken,
        record: TokenRecord,
    ) -> Result<(), TokenRepositoryError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| TokenRepositoryError::storage("token lock poisoned"))?;
        match tokens.entry(token) {
            Entry::Occupied(_) => Err(TokenRepositoryError::DuplicateToken),
            Entry::Vacant(slot) => {
                debug!(user_id = %record.identity.user_id(), issued_at = %record.issued_at, "recorded issued token");
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn resolve(
        &self,
        token: &AuthToken,
    ) -> Result<Option<TokenRecord>, TokenRepositoryError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|_| TokenRepositoryError::storage("token lock poisoned"))?;
        Ok(tokens.get(token).cloned())
    }

    async fn clear(&self) -> Result<(), TokenRepositoryError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| TokenRepositoryError::storage("token lock poisoned"))?;
        let dropped = tokens.len();
        tokens.clear();
        debug!(dropped, "invalidated issued tokens");
        Ok(())
    }
}
