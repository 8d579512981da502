//! Serializable transcript of a finished race.

use serde::{Deserialize, Serialize};

use super::engine::RoundOutcome;
use super::result::RaceResult;
use crate::core::{RaceRng, RaceRngState};

/// Everything needed to audit or replay a race.
///
/// Running the same roster against [`RaceRecord::replay_rng`] reproduces the
/// record exactly, even when the race was started from an RNG that had
/// already been drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceRecord {
    /// Seed of the RNG the race drew from.
    pub seed: u64,
    /// RNG position when the race started.
    pub rng_state: RaceRngState,
    /// Names as `[A, B]`.
    pub competitors: [String; 2],
    pub rounds: Vec<RoundOutcome>,
    /// Scores as `[A, B]`.
    pub final_scores: [u32; 2],
    pub result: RaceResult,
}

impl RaceRecord {
    /// An RNG positioned where this race started.
    #[must_use]
    pub fn replay_rng(&self) -> RaceRng {
        RaceRng::from_state(&self.rng_state)
    }

    /// Name of the winner, if any.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.result {
            RaceResult::Winner(side) => Some(self.competitors[side.index()].as_str()),
            RaceResult::Tie => None,
        }
    }
}
