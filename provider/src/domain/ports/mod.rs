//! Domain ports and supporting types for the hexagonal boundary.

mod catalogue_repository;
mod credential_repository;
mod login_service;
mod token_generator;
mod token_issuer;
mod token_repository;

#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError};
#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
pub use credential_repository::{CredentialRepository, CredentialRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use token_generator::MockTokenGenerator;
pub use token_generator::{TokenGenerator, UuidTokenGenerator};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::TokenIssuer;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
pub use token_repository::{TokenRecord, TokenRepository, TokenRepositoryError};
