//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for registry parsing and data
//! generation, following the project's error handling conventions with
//! `thiserror`.

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during user or catalogue generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid username after maximum retries.
    #[error("failed to generate valid username after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Failed to generate a valid artist name after maximum retries.
    #[error("failed to generate valid artist name after {max_attempts} attempts")]
    ArtistNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Failed to generate a valid album name after maximum retries.
    #[error("failed to generate valid album name after {max_attempts} attempts")]
    AlbumNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
