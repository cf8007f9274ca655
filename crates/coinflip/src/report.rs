//! Run orchestration and report output.

use std::io::Write;

use coinflip_core::{DEFAULT_ITERATIONS, RandomSource, Simulator, Summary};

use crate::error::CliError;

/// Configuration for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of coin flips.
    pub iterations: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS }
    }
}

/// Writes the three-line summary report followed by a newline.
pub fn write_report<W: Write>(summary: &Summary, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{summary}")?;
    out.flush()
}

/// Runs the simulation and writes the report to `out`.
///
/// Nothing is written unless the whole run succeeds.
pub fn execute<S, W>(config: RunConfig, source: S, out: &mut W) -> Result<Summary, CliError>
where
    S: RandomSource,
    W: Write,
{
    let simulator = Simulator::new(source);
    let summary = simulator.run(config.iterations)?;
    write_report(&summary, out)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use coinflip_core::{EntropyError, SimulationError};

    use super::*;

    struct EvenSource;

    impl RandomSource for EvenSource {
        fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
            buffer.fill(0);
            Ok(())
        }
    }

    #[test]
    fn default_config_is_ten_thousand() {
        assert_eq!(RunConfig::default().iterations, 10_000);
    }

    #[test]
    fn report_format() {
        let mut out = Vec::new();
        write_report(&Summary::new(3, 1), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Total Flips: 4\nHeads: 3\nTails: 1\n");
    }

    #[test]
    fn execute_writes_report() {
        let mut out = Vec::new();
        let summary = execute(RunConfig { iterations: 3 }, EvenSource, &mut out).unwrap();

        assert_eq!(summary, Summary::new(3, 0));
        assert_eq!(String::from_utf8(out).unwrap(), "Total Flips: 3\nHeads: 3\nTails: 0\n");
    }

    #[test]
    fn execute_rejects_zero_without_output() {
        let mut out = Vec::new();
        let err = execute(RunConfig { iterations: 0 }, EvenSource, &mut out).unwrap_err();

        assert!(matches!(
            err,
            CliError::Simulation(SimulationError::InvalidArgument { iterations: 0 })
        ));
        assert!(out.is_empty());
    }
}
