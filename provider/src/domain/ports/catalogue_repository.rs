//! Driven port for catalogue storage.
//!
//! The store owns registration order: artists are appended in the order
//! they arrive and every read happens through an immutable
//! [`CatalogueSnapshot`], keeping open sessions isolated from later
//! registration.

use async_trait::async_trait;

use crate::domain::catalogue::{Artist, CatalogueSnapshot};

/// Errors raised by catalogue storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueRepositoryError {
    /// The backing store failed to read or write.
    #[error("catalogue store failed: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
    },
    /// An artist id in the submission is already registered.
    #[error("artist '{id}' is already registered")]
    DuplicateArtist {
        /// The conflicting artist id.
        id: String,
    },
}

impl CatalogueRepositoryError {
    /// Construct a [`CatalogueRepositoryError::Storage`] error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Construct a [`CatalogueRepositoryError::DuplicateArtist`] error.
    pub fn duplicate_artist(id: impl Into<String>) -> Self {
        Self::DuplicateArtist { id: id.into() }
    }
}

/// Port for registering artists and snapshotting the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Append artists to the catalogue, preserving submission order.
    ///
    /// The submission is rejected as a whole when any artist id is already
    /// registered (or repeated within the submission itself).
    async fn register_artists(&self, artists: Vec<Artist>)
        -> Result<(), CatalogueRepositoryError>;

    /// Capture an immutable snapshot of the current catalogue.
    async fn snapshot(&self) -> Result<CatalogueSnapshot, CatalogueRepositoryError>;

    /// Discard every registered artist.
    async fn clear(&self) -> Result<(), CatalogueRepositoryError>;
}
