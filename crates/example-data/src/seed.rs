//! Generated seed record types.
//!
//! This module defines the output types from data generation. These types
//! are independent of provider domain types to avoid circular dependencies;
//! they are converted into domain types at the point of use.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example user record.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     username: "ada_lovelace".to_owned(),
///     password: "difference engine".to_owned(),
/// };
///
/// assert_eq!(user.username, "ada_lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Username doubling as the externally visible user id.
    pub username: String,
    /// Plain-text password for the reference credential store.
    pub password: String,
}

/// A generated example album record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleAlbumSeed {
    /// Unique identifier for the album.
    pub id: Uuid,
    /// Album display name.
    pub name: String,
}

/// A generated example artist record with its albums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleArtistSeed {
    /// Unique identifier for the artist.
    pub id: Uuid,
    /// Artist display name.
    pub name: String,
    /// The artist's albums in generation order.
    pub albums: Vec<ExampleAlbumSeed>,
}
