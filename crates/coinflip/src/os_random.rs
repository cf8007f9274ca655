//! Production random source using OS entropy.

use coinflip_core::{EntropyError, RandomSource};

/// Random source backed by the operating system CSPRNG.
///
/// # Security
///
/// Uses `getrandom`, which reads the OS entropy pool. Failures are
/// reported, never papered over with fallback bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    /// Create a new OS-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(buffer).map_err(|e| {
            tracing::error!("getrandom failed: {}", e);
            EntropyError::Unavailable { reason: e.to_string() }
        })
    }
}
