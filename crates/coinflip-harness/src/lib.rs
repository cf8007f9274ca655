//! Deterministic random sources for coin flip testing.
//!
//! This crate provides `RandomSource` implementations whose output is fully
//! determined by their construction, so a simulation run can be replayed
//! exactly:
//!
//! - [`ScriptedSource`]: hands out a fixed list of draws, then runs dry
//! - [`SeededSource`]: ChaCha20 stream from a `u64` seed
//! - [`FailingSource`]: wraps another source and fails on a chosen call
//!
//! # Example
//!
//! ```rust
//! use coinflip_core::{Simulator, Summary};
//! use coinflip_harness::ScriptedSource;
//!
//! let sim = Simulator::new(ScriptedSource::from_integers(&[2, 3, 4, 5]));
//! assert_eq!(sim.run(4), Ok(Summary::new(2, 2)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod failing;
mod scripted;
mod seeded;

pub use failing::FailingSource;
pub use scripted::ScriptedSource;
pub use seeded::SeededSource;
