//! Domain primitives, ports, and services.
//!
//! Purpose: define the validated entities of the catalogue provider (users,
//! tokens, artists, albums), the hexagonal ports they travel through, and
//! the services that enforce the session/query contract. Types are immutable
//! once constructed; each type documents its invariants and serde contract
//! in its own Rustdoc.

pub mod auth;
pub mod catalogue;
pub mod error;
pub mod identity;
pub mod library;
pub mod library_service;
pub mod ports;
pub mod token;
pub mod token_authority;

pub use self::auth::{LoginCredentials, LoginValidationError, Password};
pub use self::catalogue::{
    Album, AlbumId, AlbumQuery, Artist, ArtistId, ArtistSummary, CatalogueSnapshot,
    CatalogueValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity::{Identity, Username, UsernameValidationError};
pub use self::library::MusicLibrary;
pub use self::library_service::LibraryService;
pub use self::token::{AuthToken, IssuedToken, TokenValidationError};
pub use self::token_authority::TokenAuthority;
