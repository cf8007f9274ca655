//! Trial loop and run summary.
//!
//! # Invariants
//!
//! - Counters are local to a single [`Simulator::run`] call
//! - `heads + tails == total` for every [`Summary`] produced by a run
//! - A failed run yields no summary

use std::fmt;

use crate::{
    error::SimulationError,
    outcome::{DRAW_BYTES, Draw, Outcome},
    source::{EntropyError, RandomSource},
};

/// Trial count used by the `coinflip` binary.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

/// Tally of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Summary {
    total: u64,
    heads: u64,
    tails: u64,
}

impl Summary {
    /// Builds a summary from outcome counts. `total` is their sum.
    pub const fn new(heads: u64, tails: u64) -> Self {
        Self { total: heads + tails, heads, tails }
    }

    /// Number of trials.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of even draws.
    pub const fn heads(&self) -> u64 {
        self.heads
    }

    /// Number of odd draws.
    pub const fn tails(&self) -> u64 {
        self.tails
    }

    /// Count for a single outcome.
    pub const fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Heads => self.heads,
            Outcome::Tails => self.tails,
        }
    }

    /// `|heads - tails| / total`, or 0.0 for an empty summary.
    ///
    /// A sanity figure for the entropy source, not a significance test.
    pub fn imbalance(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.heads.abs_diff(self.tails) as f64 / self.total as f64
    }
}

/// Three-line report: total flips, heads, tails.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Flips: {}", self.total)?;
        writeln!(f, "Heads: {}", self.heads)?;
        write!(f, "Tails: {}", self.tails)
    }
}

/// Runs coin flip trials against an injected random source.
#[derive(Debug, Clone)]
pub struct Simulator<S> {
    source: S,
}

impl<S: RandomSource> Simulator<S> {
    /// Create a simulator drawing from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying random source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the simulator, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Draw one 256-bit value.
    pub fn draw(&self) -> Result<Draw, EntropyError> {
        let mut bytes = [0u8; DRAW_BYTES];
        self.source.random_bytes(&mut bytes)?;
        Ok(Draw::from_bytes(bytes))
    }

    /// Flip `iterations` coins and tally the outcomes.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidArgument`] if `iterations` is zero
    /// - [`SimulationError::RandomnessUnavailable`] on the first source
    ///   failure, with no retry and no partial summary
    pub fn run(&self, iterations: u64) -> Result<Summary, SimulationError> {
        if iterations == 0 {
            return Err(SimulationError::InvalidArgument { iterations });
        }

        tracing::debug!(iterations, "starting coin flip run");

        let mut heads = 0u64;
        let mut tails = 0u64;

        for trial in 0..iterations {
            let draw = self.draw().map_err(|source| {
                tracing::warn!(trial, error = %source, "random source failed, aborting run");
                SimulationError::RandomnessUnavailable { trial, source }
            })?;

            let outcome = draw.outcome();
            tracing::trace!(trial, %outcome, "flip");

            match outcome {
                Outcome::Heads => heads += 1,
                Outcome::Tails => tails += 1,
            }
        }

        let summary = Summary::new(heads, tails);
        debug_assert_eq!(summary.total(), iterations);

        tracing::info!(total = summary.total(), heads, tails, "coin flip run complete");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Alternates even and odd draws, optionally failing at a call index.
    struct AlternatingSource {
        calls: Mutex<u64>,
        fail_at: Option<u64>,
    }

    impl AlternatingSource {
        fn new() -> Self {
            Self { calls: Mutex::new(0), fail_at: None }
        }

        fn failing_at(call: u64) -> Self {
            Self { calls: Mutex::new(0), fail_at: Some(call) }
        }

        fn calls(&self) -> u64 {
            *self.calls.lock().unwrap()
        }
    }

    impl RandomSource for AlternatingSource {
        fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
            let mut calls = self.calls.lock().unwrap();
            let call = *calls;
            *calls += 1;

            if self.fail_at == Some(call) {
                return Err(EntropyError::Unavailable { reason: "injected".to_string() });
            }

            buffer.fill(0);
            if let Some(last) = buffer.last_mut() {
                *last = (call % 2) as u8;
            }
            Ok(())
        }
    }

    #[test]
    fn zero_iterations_rejected() {
        let sim = Simulator::new(AlternatingSource::new());
        assert_eq!(sim.run(0), Err(SimulationError::InvalidArgument { iterations: 0 }));
        assert_eq!(sim.source().calls(), 0, "no draws before validation");
    }

    #[test]
    fn single_trial() {
        let sim = Simulator::new(AlternatingSource::new());
        assert_eq!(sim.run(1).unwrap(), Summary::new(1, 0));
    }

    #[test]
    fn alternating_source_splits_evenly() {
        let sim = Simulator::new(AlternatingSource::new());
        let summary = sim.run(10).unwrap();

        assert_eq!(summary.total(), 10);
        assert_eq!(summary.heads(), 5);
        assert_eq!(summary.tails(), 5);
        assert_eq!(sim.source().calls(), 10);
    }

    #[test]
    fn counters_reset_between_runs() {
        let sim = Simulator::new(AlternatingSource::new());
        let first = sim.run(4).unwrap();
        let second = sim.run(4).unwrap();

        assert_eq!(first.total(), 4);
        assert_eq!(second.total(), 4);
    }

    #[test]
    fn failure_stops_immediately() {
        let sim = Simulator::new(AlternatingSource::failing_at(2));
        let err = sim.run(10).unwrap_err();

        assert!(matches!(err, SimulationError::RandomnessUnavailable { trial: 2, .. }));
        assert_eq!(sim.source().calls(), 3, "no retry after failure");
    }

    #[test]
    fn summary_count_by_outcome() {
        let summary = Summary::new(7, 3);
        assert_eq!(summary.count(Outcome::Heads), 7);
        assert_eq!(summary.count(Outcome::Tails), 3);
        assert_eq!(summary.total(), 10);
    }

    #[test]
    fn summary_imbalance() {
        assert!((Summary::new(7, 3).imbalance() - 0.4).abs() < f64::EPSILON);
        assert!(Summary::new(5, 5).imbalance().abs() < f64::EPSILON);
        assert!(Summary::new(0, 0).imbalance().abs() < f64::EPSILON);
    }

    #[test]
    fn summary_display_is_three_lines() {
        let summary = Summary::new(4_987, 5_013);
        assert_eq!(summary.to_string(), "Total Flips: 10000\nHeads: 4987\nTails: 5013");
    }
}
