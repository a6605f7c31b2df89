//! Session token primitives.
//!
//! Tokens are opaque strings minted by a [`crate::domain::ports::TokenGenerator`]
//! implementation. The domain never inspects their contents; it only uses
//! them as lookup keys, so the single invariant is that a token is a
//! non-empty string with no surrounding whitespace.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::identity::{Identity, Username};

/// Validation errors returned by [`AuthToken::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    /// The token string was empty.
    Empty,
    /// The token string carried surrounding whitespace.
    SurroundingWhitespace,
}

impl fmt::Display for TokenValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "auth token must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "auth token must not carry surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for TokenValidationError {}

/// Opaque session token.
///
/// Tokens are compared byte-for-byte; equality is the only operation the
/// domain performs on them. They are deliberately not `Display` so raw
/// token material stays out of log output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthToken(String);

impl AuthToken {
    /// Validate and construct an [`AuthToken`] from an opaque string.
    pub fn new(token: impl Into<String>) -> Result<Self, TokenValidationError> {
        let token = token.into();
        if token.is_empty() {
            return Err(TokenValidationError::Empty);
        }
        if token.trim() != token {
            return Err(TokenValidationError::SurroundingWhitespace);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AuthToken> for String {
    fn from(value: AuthToken) -> Self {
        value.0
    }
}

impl TryFrom<String> for AuthToken {
    type Error = TokenValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Success payload of token issuance.
///
/// Serialises flat as `{userId, nickname, authToken}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct IssuedToken {
    user_id: Username,
    nickname: Username,
    auth_token: AuthToken,
}

impl IssuedToken {
    /// Assemble the issuance payload for an identity and its fresh token.
    pub fn new(identity: Identity, auth_token: AuthToken) -> Self {
        Self {
            user_id: identity.user_id().clone(),
            nickname: identity.nickname().clone(),
            auth_token,
        }
    }

    /// Stable user identifier the token was issued for.
    pub fn user_id(&self) -> &Username {
        &self.user_id
    }

    /// Display nickname bound to the token.
    pub fn nickname(&self) -> &Username {
        &self.nickname
    }

    /// The freshly minted session token.
    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Rebuild the identity facet of the payload.
    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id.clone(), self.nickname.clone())
    }

    /// Consume the payload, keeping only the token.
    pub fn into_auth_token(self) -> AuthToken {
        self.auth_token
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", TokenValidationError::Empty)]
    #[case(" abc", TokenValidationError::SurroundingWhitespace)]
    #[case("abc\n", TokenValidationError::SurroundingWhitespace)]
    fn malformed_tokens_are_rejected(#[case] raw: &str, #[case] expected: TokenValidationError) {
        let error = AuthToken::new(raw).expect_err("malformed tokens must fail");
        assert_eq!(error, expected);
    }

    #[rstest]
    fn issuance_payload_uses_contract_field_names() {
        let username = Username::new("alice").expect("valid username");
        let token = AuthToken::new("tok-1").expect("valid token");
        let issued = IssuedToken::new(Identity::from(username), token);

        let value = serde_json::to_value(&issued).expect("payload serialises");
        assert_eq!(value["userId"], "alice");
        assert_eq!(value["nickname"], "alice");
        assert_eq!(value["authToken"], "tok-1");
    }

    #[rstest]
    fn issuance_payload_round_trips() {
        let username = Username::new("alice").expect("valid username");
        let token = AuthToken::new("tok-1").expect("valid token");
        let issued = IssuedToken::new(Identity::from(username), token);

        let json = serde_json::to_string(&issued).expect("payload serialises");
        let parsed: IssuedToken = serde_json::from_str(&json).expect("payload parses back");
        assert_eq!(parsed, issued);
    }
}
