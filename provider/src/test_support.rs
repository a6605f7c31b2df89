//! Test utilities for the provider crate.
//!
//! This module provides shared fixture builders for both unit tests (in
//! `src/`) and integration tests (in `tests/`). The builders panic on
//! invalid input; fixture literals are part of the test, not data under
//! test.

use crate::domain::auth::LoginCredentials;
use crate::domain::catalogue::{Album, Artist};
use crate::outbound::memory::{InMemoryLibraryService, in_memory_library_service};

/// Build an album fixture from string literals.
pub fn album(id: &str, name: &str) -> Album {
    Album::try_from_parts(id, name)
        .unwrap_or_else(|error| panic!("album fixture must be valid: {error}"))
}

/// Build an artist fixture from string literals and `(id, name)` albums.
pub fn artist(id: &str, name: &str, albums: &[(&str, &str)]) -> Artist {
    let albums = albums
        .iter()
        .map(|(album_id, album_name)| album(album_id, album_name))
        .collect();
    Artist::try_from_parts(id, name, albums)
        .unwrap_or_else(|error| panic!("artist fixture must be valid: {error}"))
}

/// Build a credentials fixture from string literals.
pub fn credentials(username: &str, password: &str) -> LoginCredentials {
    LoginCredentials::try_from_parts(username, password)
        .unwrap_or_else(|error| panic!("credentials fixture must be valid: {error}"))
}

/// Four artists with album counts `[3, 0, 1, 1]`; five albums in total.
///
/// This shape exercises every interesting album-listing case: a multi-album
/// artist, an albumless artist, and a flattened sequence that crosses
/// artist boundaries.
pub fn demo_catalogue() -> Vec<Artist> {
    vec![
        artist(
            "artist-1",
            "The Seam Rippers",
            &[
                ("album-1-1", "First Light"),
                ("album-1-2", "Loose Threads"),
                ("album-1-3", "Third Stitch"),
            ],
        ),
        artist("artist-2", "Quiet Harbour", &[]),
        artist("artist-3", "Velvet Motorway", &[("album-3-1", "Hard Shoulder")]),
        artist("artist-4", "Paper Lanterns", &[("album-4-1", "Night Market")]),
    ]
}

/// In-memory provider pre-loaded with one user and the demo catalogue.
///
/// The registered user is `alice` / `opensesame`.
pub async fn seeded_service() -> InMemoryLibraryService {
    let service = in_memory_library_service();
    service
        .register_user(&credentials("alice", "opensesame"))
        .await
        .unwrap_or_else(|error| panic!("seeding users must succeed: {error}"));
    service
        .register_artists(demo_catalogue())
        .await
        .unwrap_or_else(|error| panic!("seeding artists must succeed: {error}"));
    service
}
