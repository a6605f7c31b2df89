//! In-memory catalogue store.
//!
//! The artist sequence is kept behind an `Arc` so snapshots are reference
//! bumps; registration swaps in a freshly built sequence, leaving every
//! previously captured snapshot untouched.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::catalogue::{Artist, CatalogueSnapshot};
use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError};

/// Registration-ordered artist store guarded by a read-write lock.
#[derive(Debug)]
pub struct InMemoryCatalogueRepository {
    artists: RwLock<Arc<[Artist]>>,
}

impl Default for InMemoryCatalogueRepository {
    fn default() -> Self {
        Self {
            artists: RwLock::new(Arc::from(Vec::new())),
        }
    }
}

impl InMemoryCatalogueRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogueRepository {
    async fn register_artists(
        &self,
        artists: Vec<Artist>,
    ) -> Result<(), CatalogueRepositoryError> {
        let mut current = self
            .artists
            .write()
            .map_err(|_| CatalogueRepositoryError::storage("catalogue lock poisoned"))?;

        let mut seen: HashSet<&str> = current.iter().map(|artist| artist.id().as_ref()).collect();
        for artist in &artists {
            if !seen.insert(artist.id().as_ref()) {
                return Err(CatalogueRepositoryError::duplicate_artist(
                    artist.id().as_ref(),
                ));
            }
        }
        drop(seen);

        let mut rebuilt = current.to_vec();
        rebuilt.extend(artists);
        let registered = rebuilt.len();
        *current = Arc::from(rebuilt);
        debug!(registered, "registered catalogue artists");
        Ok(())
    }

    async fn snapshot(&self) -> Result<CatalogueSnapshot, CatalogueRepositoryError> {
        let current = self
            .artists
            .read()
            .map_err(|_| CatalogueRepositoryError::storage("catalogue lock poisoned"))?;
        Ok(CatalogueSnapshot::new(Arc::clone(&current)))
    }

    async fn clear(&self) -> Result<(), CatalogueRepositoryError> {
        let mut current = self
            .artists
            .write()
            .map_err(|_| CatalogueRepositoryError::storage("catalogue lock poisoned"))?;
        let dropped = current.len();
        *current = Arc::from(Vec::new());
        debug!(dropped, "cleared catalogue store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use pagination::PageRequest;

    use super::*;

    fn artist(id: &str, name: &str) -> Artist {
        Artist::try_from_parts(id, name, vec![]).expect("valid artist fixture")
    }

    #[tokio::test]
    async fn registration_order_is_preserved_across_batches() {
        let store = InMemoryCatalogueRepository::new();
        store
            .register_artists(vec![artist("a1", "First"), artist("a2", "Second")])
            .await
            .expect("first batch registers");
        store
            .register_artists(vec![artist("a3", "Third")])
            .await
            .expect("second batch registers");

        let snapshot = store.snapshot().await.expect("snapshot succeeds");
        let page = snapshot.artists(&PageRequest::all());
        let ids: Vec<&str> = page.results().iter().map(|s| s.id().as_ref()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn duplicate_ids_reject_the_whole_submission() {
        let store = InMemoryCatalogueRepository::new();
        store
            .register_artists(vec![artist("a1", "First")])
            .await
            .expect("first batch registers");

        let error = store
            .register_artists(vec![artist("a2", "Second"), artist("a1", "Clash")])
            .await
            .expect_err("duplicate must fail");
        assert_eq!(
            error,
            CatalogueRepositoryError::DuplicateArtist { id: "a1".into() }
        );

        let snapshot = store.snapshot().await.expect("snapshot succeeds");
        assert_eq!(snapshot.artist_count(), 1, "rejected batch leaves no trace");
    }

    #[tokio::test]
    async fn snapshots_are_isolated_from_later_registration() {
        let store = InMemoryCatalogueRepository::new();
        store
            .register_artists(vec![artist("a1", "First")])
            .await
            .expect("first batch registers");

        let before = store.snapshot().await.expect("snapshot succeeds");
        store
            .register_artists(vec![artist("a2", "Second")])
            .await
            .expect("second batch registers");

        assert_eq!(before.artist_count(), 1);
        let after = store.snapshot().await.expect("snapshot succeeds");
        assert_eq!(after.artist_count(), 2);
    }
}
