//! Deterministic example user and catalogue data generation.
//!
//! This crate provides tools for generating believable, reproducible users,
//! artists, and albums from a JSON seed registry. It is designed to be
//! independent of provider domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON strings
//! - Deterministic user and catalogue generation using named seeds
//! - Name validation matching provider constraints
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_catalogue, generate_example_users};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seeds": [
//!         {"name": "test-seed", "seed": 42, "userCount": 2, "artistCount": 3, "maxAlbumsPerArtist": 4}
//!     ]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//!
//! let users = generate_example_users(seed_def).expect("generation succeeds");
//! let artists = generate_example_catalogue(seed_def).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 2);
//! assert_eq!(artists.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::{generate_example_catalogue, generate_example_users};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{ExampleAlbumSeed, ExampleArtistSeed, ExampleUserSeed};
pub use validation::{ENTITY_NAME_MAX, USERNAME_MAX, is_valid_entity_name, is_valid_username};
