//! Driving port for token issuance.
//!
//! In hexagonal terms this is a *driving* port: whatever binding fronts the
//! provider (an RPC layer, a conformance harness, a test) calls it to trade
//! credentials for a session token without knowing how credentials are
//! stored or tokens are minted.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::error::Error;
use crate::domain::token::IssuedToken;

/// Domain use-case port for issuing session tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Validate credentials and mint a fresh session token.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidCredentials`] when the
    /// username is unknown or the password does not match exactly; the two
    /// cases are indistinguishable to the caller.
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error>;
}
