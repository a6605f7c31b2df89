//! Authentication primitives such as login credentials.
//!
//! Keep raw payload parsing outside the domain by exposing constructors
//! that validate string inputs before a caller talks to a port or service.
//! Passwords are compared verbatim; the reference model performs no
//! hashing, so the only hygiene applied is zeroising on drop.

use std::fmt;

use zeroize::Zeroizing;

use super::identity::{Username, UsernameValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing, blank once trimmed, or too long.
    InvalidUsername(UsernameValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername(error) => error.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

impl From<UsernameValidationError> for LoginValidationError {
    fn from(value: UsernameValidationError) -> Self {
        Self::InvalidUsername(value)
    }
}

/// Stored or presented password material.
///
/// ## Invariants
/// - Non-empty; caller-provided whitespace is preserved so comparisons
///   never surprise the caller.
///
/// The backing string is zeroised when the value is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`] from caller input.
    pub fn new(password: impl Into<String>) -> Result<Self, LoginValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(password)))
    }

    /// Exact comparison against another password.
    pub fn matches(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

/// Validated login credentials used by the token authority.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace.
///
/// # Examples
/// ```
/// use provider::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("alice", "opensesame").unwrap();
/// assert_eq!(creds.username().as_ref(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Password,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, LoginValidationError> {
        let username = Username::new(username)?;
        let password = Password::new(password)?;
        Ok(Self { username, password })
    }

    /// Build credentials from already validated components.
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    /// Username used for credential lookups and as the session identity.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Password presented by the caller.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "pw")]
    #[case("   ", "pw")]
    fn blank_usernames_fail(#[case] username: &str, #[case] password: &str) {
        let error = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert!(matches!(error, LoginValidationError::InvalidUsername(_)));
    }

    #[rstest]
    fn blank_passwords_fail() {
        let error =
            LoginCredentials::try_from_parts("user", "").expect_err("empty password must fail");
        assert_eq!(error, LoginValidationError::EmptyPassword);
    }

    #[rstest]
    #[case("  alice  ", "secret")]
    #[case("bob", "correct horse battery staple")]
    fn valid_credentials_trim_username(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(username, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.username().as_ref(), username.trim());
        let presented = Password::new(password).expect("valid password");
        assert!(creds.password().matches(&presented));
    }

    #[rstest]
    fn password_comparison_is_exact() {
        let stored = Password::new("Secret").expect("valid password");
        let wrong_case = Password::new("secret").expect("valid password");
        let padded = Password::new("Secret ").expect("valid password");
        assert!(!stored.matches(&wrong_case));
        assert!(!stored.matches(&padded));
        assert!(stored.matches(&stored.clone()));
    }
}
