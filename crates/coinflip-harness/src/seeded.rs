//! Seeded pseudo-random source.

use std::sync::Mutex;

use coinflip_core::{EntropyError, RandomSource};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// ChaCha20 stream seeded from a `u64`.
///
/// Given the same seed, produces the same byte sequence. NOT for
/// production: the seed is the whole secret.
#[derive(Debug)]
pub struct SeededSource {
    seed: u64,
    rng: Mutex<ChaCha20Rng>,
}

impl SeededSource {
    /// Create a source from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)) }
    }

    /// Seed this source was built from. Log it to reproduce a run.
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| EntropyError::Unavailable { reason: "rng lock poisoned".to_string() })?;
        rng.fill_bytes(buffer);
        Ok(())
    }
}
