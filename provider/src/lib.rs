//! Reference music catalogue provider.
//!
//! The crate models the contract of a catalogue-serving backend as a
//! library: callers register credentials and artists through the
//! [`domain::LibraryService`] facade, exchange credentials for an opaque
//! session token, exchange the token for a read-only [`domain::MusicLibrary`]
//! handle, and page through artist and album listings on that handle.
//!
//! There is no wire transport here. Storage and token generation sit behind
//! hexagonal driven ports (`domain::ports`) with in-memory adapters under
//! [`outbound::memory`], so conformance harnesses can substitute their own
//! backends without touching the domain rules.

pub mod domain;
pub mod outbound;

#[cfg(feature = "example-data")]
pub mod example_catalogue;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
