//! Coin flip simulation core.
//!
//! Each trial draws 32 bytes from a [`RandomSource`], reads them as a
//! big-endian unsigned 256-bit integer, and classifies the flip by parity:
//! even is [`Outcome::Heads`], odd is [`Outcome::Tails`]. The [`Simulator`]
//! tallies outcomes over a run and returns a [`Summary`].
//!
//! ## Architecture
//!
//! ```text
//! coinflip-core
//!   ├─ RandomSource   (entropy capability, injected)
//!   ├─ Draw           (256-bit big-endian value)
//!   ├─ Outcome        (parity classification)
//!   └─ Simulator      (trial loop -> Summary)
//! ```
//!
//! This crate performs no I/O. Production entropy and report printing live
//! in the `coinflip` crate; deterministic sources live in `coinflip-harness`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod outcome;
pub mod simulator;
pub mod source;

pub use error::SimulationError;
pub use outcome::{DRAW_BYTES, Draw, Outcome};
pub use simulator::{DEFAULT_ITERATIONS, Simulator, Summary};
pub use source::{EntropyError, RandomSource};
