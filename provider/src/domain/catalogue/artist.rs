//! Artist aggregate and its listing projection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::CatalogueValidationError;

/// Opaque artist identifier supplied at registration time.
///
/// Identifiers are caller-chosen strings; the catalogue never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtistId(String);

impl ArtistId {
    /// Validate and construct an [`ArtistId`].
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogueValidationError::EmptyField { field: "artist id" });
        }
        if id.trim() != id {
            return Err(CatalogueValidationError::WhitespaceWrapped { field: "artist id" });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ArtistId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ArtistId> for String {
    fn from(value: ArtistId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ArtistId {
    type Error = CatalogueValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Artist aggregate registered as a whole unit.
///
/// ## Invariants
/// - `id` is non-empty with no surrounding whitespace.
/// - `name` is non-empty once trimmed.
/// - `albums` keeps the order the artist was registered with; the
///   catalogue never reorders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ArtistDto", into = "ArtistDto")]
pub struct Artist {
    id: ArtistId,
    name: String,
    albums: Vec<Album>,
}

impl Artist {
    /// Build an artist from validated components.
    pub fn new(
        id: ArtistId,
        name: impl Into<String>,
        albums: Vec<Album>,
    ) -> Result<Self, CatalogueValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogueValidationError::EmptyField {
                field: "artist name",
            });
        }
        Ok(Self { id, name, albums })
    }

    /// Build an artist from raw string parts.
    pub fn try_from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        albums: Vec<Album>,
    ) -> Result<Self, CatalogueValidationError> {
        Self::new(ArtistId::new(id)?, name, albums)
    }

    /// Artist identifier.
    pub fn id(&self) -> &ArtistId {
        &self.id
    }

    /// Artist display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The artist's albums in registration order.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// The `{id, name}` projection used by artist listings.
    pub fn summary(&self) -> ArtistSummary {
        ArtistSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtistDto {
    id: String,
    name: String,
    #[serde(default)]
    albums: Vec<Album>,
}

impl From<Artist> for ArtistDto {
    fn from(value: Artist) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            albums: value.albums,
        }
    }
}

impl TryFrom<ArtistDto> for Artist {
    type Error = CatalogueValidationError;

    fn try_from(value: ArtistDto) -> Result<Self, Self::Error> {
        Artist::try_from_parts(value.id, value.name, value.albums)
    }
}

/// Artist projection carried by listings; albums are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ArtistSummary {
    id: ArtistId,
    name: String,
}

impl ArtistSummary {
    /// Artist identifier.
    pub fn id(&self) -> &ArtistId {
        &self.id
    }

    /// Artist display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
