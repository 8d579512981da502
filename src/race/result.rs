//! Final result of a race.

use serde::{Deserialize, Serialize};

use super::matchup::Matchup;
use crate::core::Side;

/// Result of a completed race.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceResult {
    /// Strictly higher final score.
    Winner(Side),
    /// Equal final scores.
    Tie,
}

impl RaceResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, RaceResult::Winner(s) if *s == side)
    }
}

/// Compare final scores. Does not mutate the matchup.
#[must_use]
pub fn declare_winner(matchup: &Matchup) -> RaceResult {
    let [a, b] = matchup.scores();
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => RaceResult::Winner(Side::A),
        std::cmp::Ordering::Less => RaceResult::Winner(Side::B),
        std::cmp::Ordering::Equal => RaceResult::Tie,
    }
}
