//! Simulation error types.

use thiserror::Error;

use crate::source::EntropyError;

/// Errors that terminate a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Trial count must be at least one.
    #[error("invalid argument: iterations must be positive, got {iterations}")]
    InvalidArgument {
        /// The rejected trial count.
        iterations: u64,
    },

    /// The random source could not supply bytes for a trial.
    #[error("randomness unavailable at trial {trial}: {source}")]
    RandomnessUnavailable {
        /// Zero-based index of the trial that failed.
        trial: u64,
        /// Underlying source failure.
        #[source]
        source: EntropyError,
    },
}

impl SimulationError {
    /// Returns true if this error is fatal (unrecoverable).
    ///
    /// Every simulation error ends the run. There is no retry path.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } | Self::RandomnessUnavailable { .. } => true,
        }
    }
}
