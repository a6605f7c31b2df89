//! Seeding helpers backed by the `example-data` crate.
//!
//! Converts generated seed records into domain types and registers them
//! through the provider facade, so demonstrations and integration suites
//! can stand up a believable catalogue in one call.

use example_data::{ExampleArtistSeed, ExampleUserSeed};

use crate::domain::auth::LoginCredentials;
use crate::domain::catalogue::{Album, Artist};
use crate::domain::error::Error;
use crate::domain::library_service::LibraryService;
use crate::domain::ports::{
    CatalogueRepository, CredentialRepository, TokenGenerator, TokenRepository,
};

/// Convert one generated artist seed into a domain artist.
///
/// Seed identifiers are UUIDs; they register as their hyphenated string
/// form since catalogue ids are opaque.
pub fn artist_from_seed(seed: &ExampleArtistSeed) -> Result<Artist, Error> {
    let albums = seed
        .albums
        .iter()
        .map(|album| Album::try_from_parts(album.id.to_string(), &album.name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| Error::invalid_request(format!("invalid album seed: {error}")))?;

    Artist::try_from_parts(seed.id.to_string(), &seed.name, albums)
        .map_err(|error| Error::invalid_request(format!("invalid artist seed: {error}")))
}

/// Convert one generated user seed into login credentials.
pub fn credentials_from_seed(seed: &ExampleUserSeed) -> Result<LoginCredentials, Error> {
    LoginCredentials::try_from_parts(&seed.username, &seed.password)
        .map_err(|error| Error::invalid_request(format!("invalid user seed: {error}")))
}

/// Register generated users and artists through the provider facade.
pub async fn seed_library<C, K, T, G>(
    service: &LibraryService<C, K, T, G>,
    users: &[ExampleUserSeed],
    artists: &[ExampleArtistSeed],
) -> Result<(), Error>
where
    C: CredentialRepository,
    K: CatalogueRepository,
    T: TokenRepository,
    G: TokenGenerator,
{
    for user in users {
        service.register_user(&credentials_from_seed(user)?).await?;
    }

    let converted = artists
        .iter()
        .map(artist_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    service.register_artists(converted).await?;

    tracing::debug!(
        users = users.len(),
        artists = artists.len(),
        "seeded example library"
    );
    Ok(())
}
