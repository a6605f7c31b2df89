//! Driving port for opening catalogue sessions.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::library::MusicLibrary;
use crate::domain::token::AuthToken;

/// Domain use-case port for exchanging a token for a library session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve the token and open a read-only library session.
    ///
    /// The operation itself fails with
    /// [`crate::domain::ErrorCode::InvalidAuthToken`] when the token is
    /// unknown or has been invalidated: a rejected outcome, never a
    /// successful result carrying an absent handle.
    async fn login(&self, token: &AuthToken) -> Result<MusicLibrary, Error>;
}
