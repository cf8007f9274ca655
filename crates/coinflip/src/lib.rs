//! Coin flip simulator, production runtime.
//!
//! This crate wires the Sans-IO simulator from `coinflip-core` to:
//! - OS entropy via `getrandom`
//! - A text report written to any `io::Write`
//!
//! ## Architecture
//!
//! ```text
//! coinflip
//!   ├─ OsRandom     (production RandomSource impl)
//!   ├─ RunConfig    (trial count)
//!   └─ execute      (run, then report)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod os_random;
mod report;

pub use error::CliError;
pub use os_random::OsRandom;
pub use report::{RunConfig, execute, write_report};
