//! User identity primitives.
//!
//! The reference model keeps identity deliberately small: the username is
//! the externally visible user id and also serves as the display nickname.
//! Both facets travel together as an [`Identity`] once a token is issued.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted username length in characters.
pub const USERNAME_MAX: usize = 64;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameValidationError {
    /// The username was blank once trimmed.
    Empty,
    /// The username exceeded [`USERNAME_MAX`] characters.
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

impl fmt::Display for UsernameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username must not be empty"),
            Self::TooLong { max } => write!(f, "username must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UsernameValidationError {}

/// Externally visible user identifier.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace and non-empty.
/// - At most [`USERNAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`], trimming surrounding whitespace.
    pub fn new(username: impl AsRef<str>) -> Result<Self, UsernameValidationError> {
        let normalized = username.as_ref().trim();
        if normalized.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if normalized.chars().count() > USERNAME_MAX {
            return Err(UsernameValidationError::TooLong { max: USERNAME_MAX });
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Identity bound to an issued session token.
///
/// In this reference model the nickname mirrors the user id at issuance;
/// the two fields stay separate because real deployments diverge here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Identity {
    user_id: Username,
    nickname: Username,
}

impl Identity {
    /// Build an identity from already validated components.
    pub fn new(user_id: Username, nickname: Username) -> Self {
        Self { user_id, nickname }
    }

    /// Stable user identifier.
    pub fn user_id(&self) -> &Username {
        &self.user_id
    }

    /// Display nickname shown alongside the user id.
    pub fn nickname(&self) -> &Username {
        &self.nickname
    }
}

impl From<Username> for Identity {
    fn from(username: Username) -> Self {
        Self {
            user_id: username.clone(),
            nickname: username,
        }
    }
}
