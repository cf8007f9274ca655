//! Fuzz target for [`Simulator::run`] tallying
//!
//! # Strategy
//!
//! - Arbitrary draw sequences fed through a scripted source
//! - Requested iterations may be zero, shorter, or longer than the script
//! - Optional injected failure at an arbitrary call
//!
//! # Invariants
//!
//! - Success implies `heads + tails == iterations`
//! - Heads equals the number of even draws consumed
//! - Zero iterations MUST reject without consuming a draw
//! - Running past the script MUST fail, never fabricate outcomes
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use coinflip_core::{DRAW_BYTES, Draw, SimulationError, Simulator};
use coinflip_harness::{FailingSource, ScriptedSource};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    draws: Vec<[u8; DRAW_BYTES]>,
    iterations: u8,
    fail_on: Option<u8>,
}

fuzz_target!(|input: Input| {
    let iterations = u64::from(input.iterations);
    let available = input.draws.len() as u64;
    let fail_on = input.fail_on.map_or(0, usize::from);

    let even_prefix = |n: u64| {
        input.draws.iter().take(n as usize).filter(|d| Draw::from_bytes(**d).is_even()).count()
            as u64
    };

    let source = FailingSource::new(ScriptedSource::new(input.draws.clone()), fail_on);
    let sim = Simulator::new(source);

    match sim.run(iterations) {
        Ok(summary) => {
            assert!(iterations > 0);
            assert!(iterations <= available, "summary without enough draws");
            assert!(fail_on == 0 || fail_on as u64 > iterations);
            assert_eq!(summary.total(), iterations);
            assert_eq!(summary.heads() + summary.tails(), iterations);
            assert_eq!(summary.heads(), even_prefix(iterations));
        },
        Err(SimulationError::InvalidArgument { iterations: rejected }) => {
            assert_eq!(rejected, 0);
            assert_eq!(sim.source().calls(), 0);
        },
        Err(SimulationError::RandomnessUnavailable { trial, .. }) => {
            assert!(trial < iterations);
            assert_eq!(sim.source().calls() as u64, trial + 1);
        },
    }
});
