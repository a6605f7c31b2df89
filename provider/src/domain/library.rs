//! Read-only session handle over the catalogue.

use pagination::{Page, PageRequest};

use crate::domain::catalogue::{
    Album, AlbumQuery, ArtistId, ArtistSummary, CatalogueSnapshot,
};
use crate::domain::error::Error;
use crate::domain::identity::Identity;

/// Session-scoped view of the music catalogue.
///
/// A handle is only ever produced by a successful login: it binds the
/// resolved identity to the catalogue snapshot captured at that moment, so
/// the session observes one consistent catalogue for its whole lifetime.
/// The handle exposes reads only; registration and reset stay with the
/// provider facade.
#[derive(Debug, Clone)]
pub struct MusicLibrary {
    identity: Identity,
    catalogue: CatalogueSnapshot,
}

impl MusicLibrary {
    /// Open a session for a resolved identity over a captured snapshot.
    pub(crate) fn open(identity: Identity, catalogue: CatalogueSnapshot) -> Self {
        Self {
            identity,
            catalogue,
        }
    }

    /// Identity the session was opened for.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Paginated artist listing in registration order.
    #[must_use]
    pub fn artists(&self, request: &PageRequest) -> Page<ArtistSummary> {
        self.catalogue.artists(request)
    }

    /// Exact artist lookup by id.
    ///
    /// Fails with [`crate::domain::ErrorCode::ArtistNotFound`] naming the
    /// requested id. Collection queries stay permissive about unknown ids;
    /// this lookup is strict because a miss here is almost always a caller
    /// bug.
    pub fn artist(&self, id: &ArtistId) -> Result<ArtistSummary, Error> {
        self.catalogue
            .find_artist(id)
            .map(super::catalogue::Artist::summary)
            .ok_or_else(|| Error::artist_not_found(format!("artist '{id}' is not registered")))
    }

    /// Paginated album listing, optionally filtered to one artist.
    #[must_use]
    pub fn albums(&self, query: &AlbumQuery) -> Page<Album> {
        self.catalogue.albums(query)
    }
}
