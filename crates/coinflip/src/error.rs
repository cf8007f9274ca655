//! Binary error types.

use coinflip_core::SimulationError;
use thiserror::Error;

/// Errors that end the process with a nonzero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// The simulation itself failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
