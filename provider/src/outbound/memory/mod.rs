//! In-memory adapters for the provider's driven ports.
//!
//! These adapters are the reference wiring: process-local maps guarded by
//! `RwLock`, written only by registration and reset. They double as the
//! default backend for tests and conformance harnesses.

use std::sync::Arc;

use crate::domain::LibraryService;
use crate::domain::ports::UuidTokenGenerator;

mod catalogue_repository;
mod credential_repository;
mod token_repository;

pub use catalogue_repository::InMemoryCatalogueRepository;
pub use credential_repository::InMemoryCredentialRepository;
pub use token_repository::InMemoryTokenRepository;

/// Provider facade backed entirely by in-memory adapters.
pub type InMemoryLibraryService = LibraryService<
    InMemoryCredentialRepository,
    InMemoryCatalogueRepository,
    InMemoryTokenRepository,
    UuidTokenGenerator,
>;

/// Build a provider over fresh in-memory stores and UUID tokens.
#[must_use]
pub fn in_memory_library_service() -> InMemoryLibraryService {
    LibraryService::new(
        Arc::new(InMemoryCredentialRepository::default()),
        Arc::new(InMemoryCatalogueRepository::default()),
        Arc::new(InMemoryTokenRepository::default()),
        Arc::new(UuidTokenGenerator),
    )
}
