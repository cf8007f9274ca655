//! Entropy abstraction for deterministic testing.
//!
//! The `RandomSource` trait decouples the simulation from where its bytes
//! come from. Production uses the operating system's CSPRNG; tests
//! substitute scripted or seeded sources so that a run is reproducible.
//!
//! # Invariants
//!
//! - A successful call fills the ENTIRE buffer
//! - A failed call leaves no guarantee about buffer contents, and callers
//!   must discard it
//! - Implementations must not share global state

use std::sync::Arc;

use thiserror::Error;

/// Failure to obtain random bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The underlying entropy facility reported an error.
    #[error("entropy source unavailable: {reason}")]
    Unavailable {
        /// Description reported by the facility.
        reason: String,
    },

    /// A finite source has no more bytes to hand out.
    #[error("entropy source exhausted after {served} draws")]
    Exhausted {
        /// Number of requests served before exhaustion.
        served: usize,
    },
}

/// Capability for obtaining uniformly random bytes.
///
/// # Security
///
/// Production implementations MUST be backed by a cryptographically secure
/// generator (the OS entropy pool). Seeded or scripted implementations are
/// for tests only.
pub trait RandomSource: Send + Sync {
    /// Fills `buffer` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if the source cannot supply bytes. Callers
    /// do not retry.
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        (**self).random_bytes(buffer)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Arc<S> {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        (**self).random_bytes(buffer)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        (**self).random_bytes(buffer)
    }
}
