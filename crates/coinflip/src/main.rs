//! Coin flip simulator binary.
//!
//! # Usage
//!
//! ```bash
//! # Flip 10,000 coins using OS entropy
//! coinflip
//!
//! # Show per-run logging on stderr
//! RUST_LOG=coinflip_core=debug coinflip
//! ```

use clap::Parser;
use coinflip::{OsRandom, RunConfig, execute};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Coin flip simulator
#[derive(Parser, Debug)]
#[command(name = "coinflip")]
#[command(about = "Flips coins by the parity of cryptographically random 256-bit integers")]
#[command(version)]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries only the report
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let config = RunConfig::default();
    tracing::debug!(iterations = config.iterations, "coinflip starting");

    let stdout = std::io::stdout();
    execute(config, OsRandom::new(), &mut stdout.lock())?;

    Ok(())
}
