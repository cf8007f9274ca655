//! Draws and their parity classification.

use std::fmt;

/// Width of one draw in bytes (a 256-bit integer).
pub const DRAW_BYTES: usize = 32;

/// One random draw, read as a big-endian unsigned 256-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Draw([u8; DRAW_BYTES]);

impl Draw {
    /// Wraps raw bytes, most significant byte first.
    pub const fn from_bytes(bytes: [u8; DRAW_BYTES]) -> Self {
        Self(bytes)
    }

    /// Encodes a small integer as a 256-bit big-endian draw.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; DRAW_BYTES];
        bytes[DRAW_BYTES - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Raw bytes, most significant byte first.
    pub const fn as_bytes(&self) -> &[u8; DRAW_BYTES] {
        &self.0
    }

    /// Whether the integer is even.
    ///
    /// Big-endian, so the least-significant bit lives in the last byte.
    pub const fn is_even(&self) -> bool {
        self.0[DRAW_BYTES - 1] & 1 == 0
    }

    /// Classifies this draw.
    pub const fn outcome(&self) -> Outcome {
        Outcome::from_parity(self)
    }
}

impl From<[u8; DRAW_BYTES]> for Draw {
    fn from(bytes: [u8; DRAW_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Result of a single flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The drawn integer was even.
    Heads,
    /// The drawn integer was odd.
    Tails,
}

impl Outcome {
    /// Even is heads, odd is tails. There is no other classification path.
    pub const fn from_parity(draw: &Draw) -> Self {
        if draw.is_even() { Self::Heads } else { Self::Tails }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}
