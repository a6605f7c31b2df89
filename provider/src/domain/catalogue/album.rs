//! Album entity owned by exactly one artist.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;

/// Opaque album identifier supplied at registration time.
///
/// Identifiers are caller-chosen strings; the catalogue never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlbumId(String);

impl AlbumId {
    /// Validate and construct an [`AlbumId`].
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogueValidationError::EmptyField { field: "album id" });
        }
        if id.trim() != id {
            return Err(CatalogueValidationError::WhitespaceWrapped { field: "album id" });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AlbumId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<AlbumId> for String {
    fn from(value: AlbumId) -> Self {
        value.0
    }
}

impl TryFrom<String> for AlbumId {
    type Error = CatalogueValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Album record as listed through a session handle.
///
/// ## Invariants
/// - `id` is non-empty with no surrounding whitespace.
/// - `name` is non-empty once trimmed.
///
/// Serialises as `{id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "AlbumDto", into = "AlbumDto")]
pub struct Album {
    id: AlbumId,
    name: String,
}

impl Album {
    /// Build an album from a validated id and a display name.
    pub fn new(id: AlbumId, name: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogueValidationError::EmptyField {
                field: "album name",
            });
        }
        Ok(Self { id, name })
    }

    /// Build an album from raw string parts.
    pub fn try_from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, CatalogueValidationError> {
        Self::new(AlbumId::new(id)?, name)
    }

    /// Album identifier.
    pub fn id(&self) -> &AlbumId {
        &self.id
    }

    /// Album display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlbumDto {
    id: String,
    name: String,
}

impl From<Album> for AlbumDto {
    fn from(value: Album) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
        }
    }
}

impl TryFrom<AlbumDto> for Album {
    type Error = CatalogueValidationError;

    fn try_from(value: AlbumDto) -> Result<Self, Self::Error> {
        Album::try_from_parts(value.id, value.name)
    }
}
