//! Race configuration.
//!
//! - `Pacing`: presentation delays between console lines
//! - `RaceConfig`: seed and pacing for one race
//!
//! Neither affects scoring. A race with `Pacing::instant()` produces the
//! same outcome as a paced one with the same seed.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Presentation delays used by the console reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Pause after announcing a round.
    pub round_start: Duration,
    /// Pause before each of the three "rolling dice" ticks.
    pub dice_tick: Duration,
    /// Pause after announcing the block.
    pub after_block: Duration,
    /// Pause between rounds (not after the last one).
    pub between_rounds: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            round_start: Duration::from_millis(1000),
            dice_tick: Duration::from_millis(200),
            after_block: Duration::from_millis(800),
            between_rounds: Duration::from_millis(2000),
        }
    }
}

impl Pacing {
    /// No delays at all. Used by tests and `RACE_INSTANT`.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            round_start: Duration::ZERO,
            dice_tick: Duration::ZERO,
            after_block: Duration::ZERO,
            between_rounds: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn is_instant(&self) -> bool {
        *self == Self::instant()
    }
}

/// Configuration for a single race.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Console pacing.
    pub pacing: Pacing,
}

impl RaceConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RACE_SEED` - fixed RNG seed (default: entropy)
    /// - `RACE_INSTANT` - `1` or `true` disables pacing delays
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("RACE_SEED") {
            config.seed = Some(seed);
        }

        if read_flag("RACE_INSTANT") {
            config.pacing = Pacing::instant();
        }

        config
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the console pacing.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
