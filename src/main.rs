//! Race simulator binary.
//!
//! Takes no arguments. Prints the race to stdout and diagnostics (filtered
//! by `RUST_LOG`) to stderr.
//!
//! Optional environment:
//! - `RACE_SEED` - replay a specific race
//! - `RACE_INSTANT` - skip pacing delays

use anyhow::Result;
use kart_race::{ConsoleReporter, Race, RaceConfig, Roster};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RaceConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let roster = Roster::classic();
    let mut reporter = ConsoleReporter::new(std::io::stdout().lock(), config.pacing);

    let record = Race::new(config).run(&roster, &mut reporter)?;
    tracing::info!(seed = record.seed, winner = ?record.winner_name(), "done");

    Ok(())
}
