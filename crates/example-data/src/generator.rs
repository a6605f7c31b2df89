//! Deterministic user and catalogue generation from seed definitions.
//!
//! This module provides the core generation functions that produce
//! reproducible data from a seed definition. The same seed value always
//! produces identical output.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::SeedDefinition;
use crate::seed::{ExampleAlbumSeed, ExampleArtistSeed, ExampleUserSeed};
use crate::validation::{is_valid_entity_name, is_valid_username};

/// Maximum number of attempts to generate a valid name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Length of generated plain-text passwords.
const PASSWORD_LEN: usize = 16;

/// Probability numerator for prefixing artist names with "The".
const THE_PREFIX_NUMERATOR: u32 = 2;

/// Probability denominator for prefixing artist names with "The".
const THE_PREFIX_DENOMINATOR: u32 = 5;

/// Maximum number of words in a generated album title.
const ALBUM_TITLE_MAX_WORDS: usize = 3;

/// Generates example users from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same seed definition. Generated usernames are
/// unique within one invocation and valid against provider constraints.
///
/// # Errors
///
/// Returns [`GenerationError::UsernameGenerationFailed`] if no valid
/// username could be produced after the maximum number of retries.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_users};
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "test", "seed": 42, "userCount": 3, "artistCount": 0, "maxAlbumsPerArtist": 0}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let users = generate_example_users(seed_def).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// // Same seed produces identical users
/// let users2 = generate_example_users(seed_def).expect("generated");
/// assert_eq!(users, users2);
/// ```
pub fn generate_example_users(
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut taken = HashSet::new();
    let mut users = Vec::with_capacity(seed_def.user_count());

    for _ in 0..seed_def.user_count() {
        let username = generate_username(&mut rng, &mut taken)?;
        let password = generate_password(&mut rng);
        users.push(ExampleUserSeed { username, password });
    }

    Ok(users)
}

/// Generates an example catalogue from a seed definition.
///
/// Produces `artist_count` artists, each carrying between zero and
/// `max_albums_per_artist` albums. Artist and album identifiers are UUIDs
/// derived from the deterministic RNG, so the whole catalogue reproduces
/// exactly for a given seed.
///
/// # Errors
///
/// Returns [`GenerationError`] if no valid artist or album name could be
/// produced after the maximum number of retries.
pub fn generate_example_catalogue(
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleArtistSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut artists = Vec::with_capacity(seed_def.artist_count());

    for _ in 0..seed_def.artist_count() {
        let artist = generate_single_artist(&mut rng, seed_def.max_albums_per_artist())?;
        artists.push(artist);
    }

    Ok(artists)
}

/// Generates a single artist with its albums using the provided RNG.
fn generate_single_artist(
    rng: &mut ChaCha8Rng,
    max_albums: usize,
) -> Result<ExampleArtistSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());
    let name = generate_artist_name(rng)?;

    let album_count = if max_albums == 0 {
        0
    } else {
        rng.random_range(0..=max_albums)
    };
    let mut albums = Vec::with_capacity(album_count);
    for _ in 0..album_count {
        albums.push(ExampleAlbumSeed {
            id: Uuid::from_u128(rng.random()),
            name: generate_album_name(rng)?,
        });
    }

    Ok(ExampleArtistSeed { id, name, albums })
}

/// Generates a unique valid username using the provided RNG.
///
/// Usernames are built from a lowercased first/last name pair joined by an
/// underscore. Collisions within one invocation get a numeric suffix drawn
/// from the RNG so determinism is preserved.
fn generate_username(
    rng: &mut ChaCha8Rng,
    taken: &mut HashSet<String>,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let mut candidate = format!("{first}_{last}")
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect::<String>();

        if taken.contains(&candidate) {
            let suffix: u16 = rng.random_range(10..1000);
            candidate = format!("{candidate}_{suffix}");
        }

        if is_valid_username(&candidate) && taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Generates an alphanumeric password using the provided RNG.
fn generate_password(rng: &mut ChaCha8Rng) -> String {
    (0..PASSWORD_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Generates a valid artist name using the provided RNG.
///
/// Names are two capitalised words, with a "The" prefix roughly two times
/// in five.
fn generate_artist_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first = capitalised_word(rng);
        let second = capitalised_word(rng);
        let candidate = if rng.random_ratio(THE_PREFIX_NUMERATOR, THE_PREFIX_DENOMINATOR) {
            format!("The {first} {second}")
        } else {
            format!("{first} {second}")
        };

        if is_valid_entity_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::ArtistNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Generates a valid album title using the provided RNG.
fn generate_album_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let word_count = rng.random_range(1..=ALBUM_TITLE_MAX_WORDS);
        let candidate = (0..word_count)
            .map(|_| capitalised_word(rng))
            .collect::<Vec<_>>()
            .join(" ");

        if is_valid_entity_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::AlbumNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Draws one lorem word and capitalises its first character.
fn capitalised_word(rng: &mut ChaCha8Rng) -> String {
    let word: String = Word(EN).fake_with_rng(rng);
    let mut chars = word.chars();
    let Some(head) = chars.next() else {
        return word;
    };
    head.to_uppercase().chain(chars).collect()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::registry::SeedRegistry;

    #[fixture]
    fn registry() -> SeedRegistry {
        SeedRegistry::from_json(
            r#"{
                "version": 1,
                "seeds": [
                    {"name": "test", "seed": 42, "userCount": 8, "artistCount": 6, "maxAlbumsPerArtist": 4},
                    {"name": "other", "seed": 43, "userCount": 8, "artistCount": 6, "maxAlbumsPerArtist": 4}
                ]
            }"#,
        )
        .expect("valid registry")
    }

    #[rstest]
    fn users_reproduce_for_the_same_seed(registry: SeedRegistry) {
        let seed_def = registry.find_seed("test").expect("seed found");
        let first = generate_example_users(seed_def).expect("generation succeeds");
        let second = generate_example_users(seed_def).expect("generation succeeds");
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[rstest]
    fn catalogues_reproduce_for_the_same_seed(registry: SeedRegistry) {
        let seed_def = registry.find_seed("test").expect("seed found");
        let first = generate_example_catalogue(seed_def).expect("generation succeeds");
        let second = generate_example_catalogue(seed_def).expect("generation succeeds");
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[rstest]
    fn different_seeds_produce_different_catalogues(registry: SeedRegistry) {
        let test = registry.find_seed("test").expect("seed found");
        let other = registry.find_seed("other").expect("seed found");
        let first = generate_example_catalogue(test).expect("generation succeeds");
        let second = generate_example_catalogue(other).expect("generation succeeds");
        assert_ne!(first, second);
    }

    #[rstest]
    fn generated_usernames_are_unique_and_valid(registry: SeedRegistry) {
        let seed_def = registry.find_seed("test").expect("seed found");
        let users = generate_example_users(seed_def).expect("generation succeeds");

        let usernames: HashSet<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames.len(), users.len());
        for user in &users {
            assert!(is_valid_username(&user.username), "{:?}", user.username);
            assert_eq!(user.password.chars().count(), PASSWORD_LEN);
        }
    }

    #[rstest]
    fn generated_names_respect_provider_constraints(registry: SeedRegistry) {
        let seed_def = registry.find_seed("test").expect("seed found");
        let artists = generate_example_catalogue(seed_def).expect("generation succeeds");

        for artist in &artists {
            assert!(is_valid_entity_name(&artist.name), "{:?}", artist.name);
            assert!(artist.albums.len() <= seed_def.max_albums_per_artist());
            for album in &artist.albums {
                assert!(is_valid_entity_name(&album.name), "{:?}", album.name);
            }
        }
    }
}
