//! Immutable catalogue snapshot and the paginated query engine.
//!
//! A snapshot is captured from the catalogue store when a session opens and
//! is shared by cheap `Arc` clone from then on. Every query below is a pure
//! function over the captured artist sequence: filtering always happens
//! before windowing, totals always describe the filtered sequence before
//! the window is applied, and nothing here can reorder what registration
//! put in place.

use std::sync::Arc;

use pagination::{Page, PageRequest};

use super::album::Album;
use super::artist::{Artist, ArtistId, ArtistSummary};

/// Query parameters for album listings.
///
/// `artist_id` narrows the candidate sequence to one artist's albums before
/// the window in `page` is applied. A filter naming an unknown artist is a
/// valid query with an empty result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumQuery {
    /// Restrict candidates to this artist's albums.
    pub artist_id: Option<ArtistId>,
    /// Window over the filtered candidate sequence.
    pub page: PageRequest,
}

impl AlbumQuery {
    /// Query over every album of every artist.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            artist_id: None,
            page: PageRequest::all(),
        }
    }

    /// Query over one artist's albums.
    #[must_use]
    pub const fn for_artist(artist_id: ArtistId) -> Self {
        Self {
            artist_id: Some(artist_id),
            page: PageRequest::all(),
        }
    }

    /// Replace the window specification.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// Immutable view of the registered catalogue.
///
/// Clones share the backing artist sequence, so handing a snapshot to each
/// session is an `Arc` bump rather than a copy.
#[derive(Debug, Clone)]
pub struct CatalogueSnapshot {
    artists: Arc<[Artist]>,
}

impl CatalogueSnapshot {
    /// Wrap an already ordered artist sequence.
    pub fn new(artists: Arc<[Artist]>) -> Self {
        Self { artists }
    }

    /// Snapshot of an empty catalogue.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            artists: Arc::from(Vec::new()),
        }
    }

    /// Number of registered artists.
    #[must_use]
    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// Paginated artist listing.
    ///
    /// Artists appear in registration order, projected to `{id, name}`;
    /// the reported total is the full artist count regardless of window.
    #[must_use]
    pub fn artists(&self, request: &PageRequest) -> Page<ArtistSummary> {
        let summaries: Vec<ArtistSummary> = self.artists.iter().map(Artist::summary).collect();
        Page::from_vec(summaries, request)
    }

    /// Exact artist lookup by id.
    #[must_use]
    pub fn find_artist(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id() == id)
    }

    /// Paginated album listing, optionally filtered to one artist.
    ///
    /// The candidate sequence is assembled first (one artist's albums, or
    /// every artist's albums flattened in registration order), the total is
    /// taken from that sequence, and only then is the window applied.
    #[must_use]
    pub fn albums(&self, query: &AlbumQuery) -> Page<Album> {
        let candidates: Vec<Album> = match &query.artist_id {
            Some(id) => self
                .find_artist(id)
                .map(|artist| artist.albums().to_vec())
                .unwrap_or_default(),
            None => self
                .artists
                .iter()
                .flat_map(|artist| artist.albums().iter().cloned())
                .collect(),
        };
        Page::from_vec(candidates, &query.page)
    }
}

impl From<Vec<Artist>> for CatalogueSnapshot {
    fn from(artists: Vec<Artist>) -> Self {
        Self {
            artists: Arc::from(artists),
        }
    }
}
