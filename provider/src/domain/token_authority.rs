//! Token authority domain service.
//!
//! Owns the issuance rule (exact password match against the credential
//! store) and the token map. Lookup misses and password mismatches are
//! reported identically so callers cannot probe for registered usernames.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::LoginCredentials;
use crate::domain::error::Error;
use crate::domain::identity::Identity;
use crate::domain::ports::{
    CredentialRepository, CredentialRepositoryError, TokenGenerator, TokenIssuer, TokenRecord,
    TokenRepository, TokenRepositoryError,
};
use crate::domain::token::{AuthToken, IssuedToken};

/// Shared rejection message for unknown usernames and wrong passwords.
const CREDENTIALS_REJECTED: &str = "invalid username or password";

fn map_credential_error(error: CredentialRepositoryError) -> Error {
    Error::internal(format!("credential store unavailable: {error}"))
}

fn map_token_error(error: TokenRepositoryError) -> Error {
    Error::internal(format!("token store unavailable: {error}"))
}

/// Service minting and resolving session tokens.
pub struct TokenAuthority<C, T, G> {
    credentials: Arc<C>,
    tokens: Arc<T>,
    generator: Arc<G>,
}

impl<C, T, G> TokenAuthority<C, T, G> {
    /// Create an authority over the given stores and token generator.
    pub fn new(credentials: Arc<C>, tokens: Arc<T>, generator: Arc<G>) -> Self {
        Self {
            credentials,
            tokens,
            generator,
        }
    }
}

impl<C, T, G> TokenAuthority<C, T, G>
where
    C: CredentialRepository,
    T: TokenRepository,
    G: TokenGenerator,
{
    /// Resolve a token to the identity it was issued for.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidAuthToken`] when the
    /// token was never issued or has been invalidated by a reset.
    pub async fn resolve_token(&self, token: &AuthToken) -> Result<Identity, Error> {
        let record = self
            .tokens
            .resolve(token)
            .await
            .map_err(map_token_error)?;
        match record {
            Some(record) => Ok(record.identity),
            None => {
                tracing::warn!("rejected unresolvable session token");
                Err(Error::invalid_auth_token("auth token is not recognised"))
            }
        }
    }

    /// Invalidate every issued token.
    pub async fn invalidate_all(&self) -> Result<(), Error> {
        self.tokens.clear().await.map_err(map_token_error)
    }
}

#[async_trait]
impl<C, T, G> TokenIssuer for TokenAuthority<C, T, G>
where
    C: CredentialRepository,
    T: TokenRepository,
    G: TokenGenerator,
{
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        let stored = self
            .credentials
            .lookup(credentials.username())
            .await
            .map_err(map_credential_error)?;

        let accepted = stored
            .as_ref()
            .is_some_and(|password| password.matches(credentials.password()));
        if !accepted {
            tracing::warn!(username = %credentials.username(), "rejected token issuance");
            return Err(Error::invalid_credentials(CREDENTIALS_REJECTED));
        }

        let identity = Identity::from(credentials.username().clone());
        let token = self.generator.mint();
        let record = TokenRecord::new(identity.clone(), Utc::now());
        self.tokens
            .insert(token.clone(), record)
            .await
            .map_err(map_token_error)?;

        tracing::info!(user_id = %identity.user_id(), "issued session token");
        Ok(IssuedToken::new(identity, token))
    }
}

#[cfg(test)]
#[path = "token_authority_tests.rs"]
mod tests;
