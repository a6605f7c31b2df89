//! Provider facade wiring the token authority to the catalogue store.
//!
//! This is the assembly callers interact with: setup operations to register
//! users and artists, a global reset, and the two driving ports
//! ([`TokenIssuer`] and [`LoginService`]) that make up the session
//! contract. Registration is expected to finish before sessions open;
//! sessions are insulated from later registration by the snapshot taken at
//! login.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::catalogue::Artist;
use crate::domain::error::Error;
use crate::domain::library::MusicLibrary;
use crate::domain::ports::{
    CatalogueRepository, CatalogueRepositoryError, CredentialRepository, CredentialRepositoryError,
    LoginService, TokenGenerator, TokenIssuer, TokenRepository,
};
use crate::domain::token::{AuthToken, IssuedToken};
use crate::domain::token_authority::TokenAuthority;

fn map_credential_error(error: CredentialRepositoryError) -> Error {
    Error::internal(format!("credential store unavailable: {error}"))
}

fn map_catalogue_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::DuplicateArtist { id } => {
            Error::invalid_request(format!("artist '{id}' is already registered"))
        }
        CatalogueRepositoryError::Storage { message } => {
            Error::internal(format!("catalogue store unavailable: {message}"))
        }
    }
}

/// Facade over the catalogue provider's stores and services.
pub struct LibraryService<C, K, T, G> {
    credentials: Arc<C>,
    catalogue: Arc<K>,
    authority: TokenAuthority<C, T, G>,
}

impl<C, K, T, G> LibraryService<C, K, T, G>
where
    C: CredentialRepository,
    K: CatalogueRepository,
    T: TokenRepository,
    G: TokenGenerator,
{
    /// Assemble the facade from its port implementations.
    pub fn new(
        credentials: Arc<C>,
        catalogue: Arc<K>,
        tokens: Arc<T>,
        generator: Arc<G>,
    ) -> Self {
        let authority = TokenAuthority::new(Arc::clone(&credentials), tokens, generator);
        Self {
            credentials,
            catalogue,
            authority,
        }
    }

    /// Register a user for later token issuance.
    ///
    /// Re-registering a username replaces the stored password.
    pub async fn register_user(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        self.credentials
            .register(credentials)
            .await
            .map_err(map_credential_error)?;
        tracing::debug!(username = %credentials.username(), "registered user");
        Ok(())
    }

    /// Register artists, appending them in submission order.
    pub async fn register_artists(&self, artists: Vec<Artist>) -> Result<(), Error> {
        let count = artists.len();
        self.catalogue
            .register_artists(artists)
            .await
            .map_err(map_catalogue_error)?;
        tracing::debug!(count, "registered artists");
        Ok(())
    }

    /// Discard all users, artists, and issued tokens.
    ///
    /// Already-open [`MusicLibrary`] handles keep their snapshot, but every
    /// issued token stops resolving, so no new session can observe the
    /// discarded state.
    pub async fn reset(&self) -> Result<(), Error> {
        self.authority.invalidate_all().await?;
        self.credentials
            .clear()
            .await
            .map_err(map_credential_error)?;
        self.catalogue.clear().await.map_err(map_catalogue_error)?;
        tracing::info!("reset provider state");
        Ok(())
    }
}

#[async_trait]
impl<C, K, T, G> TokenIssuer for LibraryService<C, K, T, G>
where
    C: CredentialRepository,
    K: CatalogueRepository,
    T: TokenRepository,
    G: TokenGenerator,
{
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        self.authority.issue_token(credentials).await
    }
}

#[async_trait]
impl<C, K, T, G> LoginService for LibraryService<C, K, T, G>
where
    C: CredentialRepository,
    K: CatalogueRepository,
    T: TokenRepository,
    G: TokenGenerator,
{
    async fn login(&self, token: &AuthToken) -> Result<MusicLibrary, Error> {
        let identity = self.authority.resolve_token(token).await?;
        let snapshot = self
            .catalogue
            .snapshot()
            .await
            .map_err(map_catalogue_error)?;
        tracing::info!(
            user_id = %identity.user_id(),
            artists = snapshot.artist_count(),
            "opened library session"
        );
        Ok(MusicLibrary::open(identity, snapshot))
    }
}

#[cfg(test)]
#[path = "library_service_tests.rs"]
mod tests;
