//! Name validation mirroring provider constraints.
//!
//! These rules match the provider's `Username` and catalogue name
//! invariants. Keeping them in sync ensures generated data is always valid
//! when registered with the provider.
//!
//! # Validation Rules
//!
//! - Usernames: trimmed, non-empty, at most 64 characters, ASCII
//!   alphanumeric plus underscores.
//! - Entity names (artists, albums): non-blank, at most 64 characters,
//!   printable ASCII.

/// Maximum allowed length for a username in characters.
pub const USERNAME_MAX: usize = 64;

/// Maximum length this crate generates for artist and album names.
pub const ENTITY_NAME_MAX: usize = 64;

/// Validates a username against provider constraints.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_username;
///
/// assert!(is_valid_username("ada_lovelace"));
/// assert!(!is_valid_username(" padded "));
/// assert!(!is_valid_username(""));
/// ```
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    if username.is_empty() || username.trim() != username {
        return false;
    }
    if username.chars().count() > USERNAME_MAX {
        return false;
    }
    username.chars().all(is_valid_username_char)
}

/// Returns `true` if the character is allowed in a generated username.
#[must_use]
const fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validates an artist or album display name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_entity_name;
///
/// assert!(is_valid_entity_name("The Velvet Paradigm"));
/// assert!(!is_valid_entity_name("   "));
/// ```
#[must_use]
pub fn is_valid_entity_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    if name.chars().count() > ENTITY_NAME_MAX {
        return false;
    }
    name.chars().all(|c| c.is_ascii_graphic() || c == ' ')
}
