//! Fixed-sequence source.

use std::{collections::VecDeque, sync::Mutex};

use coinflip_core::{DRAW_BYTES, Draw, EntropyError, RandomSource};

/// Yields a predetermined sequence of 32-byte draws.
///
/// Each call to `random_bytes` consumes one scripted draw. Requests for
/// other lengths take a prefix of the draw (or zero-pad it). Once the
/// script is empty every call fails with [`EntropyError::Exhausted`].
#[derive(Debug)]
pub struct ScriptedSource {
    state: Mutex<Script>,
}

#[derive(Debug)]
struct Script {
    remaining: VecDeque<[u8; DRAW_BYTES]>,
    served: usize,
}

impl ScriptedSource {
    /// Script from raw draws.
    pub fn new(draws: impl IntoIterator<Item = [u8; DRAW_BYTES]>) -> Self {
        Self { state: Mutex::new(Script { remaining: draws.into_iter().collect(), served: 0 }) }
    }

    /// Script from small integers, each encoded big-endian into 256 bits.
    pub fn from_integers(values: &[u64]) -> Self {
        Self::new(values.iter().map(|&v| *Draw::from_u64(v).as_bytes()))
    }

    /// Number of draws handed out so far.
    pub fn served(&self) -> usize {
        self.state.lock().map_or(0, |s| s.served)
    }

    /// Number of draws left in the script.
    pub fn remaining(&self) -> usize {
        self.state.lock().map_or(0, |s| s.remaining.len())
    }
}

impl RandomSource for ScriptedSource {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        let mut script = self
            .state
            .lock()
            .map_err(|_| EntropyError::Unavailable { reason: "script lock poisoned".to_string() })?;

        let served = script.served;
        let draw = script.remaining.pop_front().ok_or(EntropyError::Exhausted { served })?;
        script.served += 1;

        let n = buffer.len().min(DRAW_BYTES);
        buffer[..n].copy_from_slice(&draw[..n]);
        buffer[n..].fill(0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_in_order_then_runs_dry() {
        let source = ScriptedSource::from_integers(&[1, 2]);
        let mut buf = [0u8; DRAW_BYTES];

        source.random_bytes(&mut buf).unwrap();
        assert_eq!(buf, *Draw::from_u64(1).as_bytes());

        source.random_bytes(&mut buf).unwrap();
        assert_eq!(buf, *Draw::from_u64(2).as_bytes());

        assert_eq!(source.random_bytes(&mut buf), Err(EntropyError::Exhausted { served: 2 }));
        assert_eq!(source.served(), 2);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn short_buffer_takes_prefix() {
        let mut bytes = [0u8; DRAW_BYTES];
        bytes[0] = 0xAA;
        bytes[1] = 0xBB;
        let source = ScriptedSource::new([bytes]);

        let mut buf = [0u8; 2];
        source.random_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0xAA, 0xBB]);
    }
}
