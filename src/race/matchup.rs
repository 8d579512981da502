//! The ephemeral context of a single match.

use std::ops::{Index, IndexMut};

use crate::core::{Competitor, CompetitorId, RaceError, Result, Roster, Side};

/// Two competitors racing each other.
///
/// The matchup owns its own copies of the competitor records, so scoring
/// never leaks into the roster. Scores start at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    competitors: [Competitor; 2],
}

impl Matchup {
    /// Build a matchup from two records, resetting both scores.
    ///
    /// Fails if both records carry the same name.
    pub fn new(mut a: Competitor, mut b: Competitor) -> Result<Self> {
        if a.name == b.name {
            return Err(RaceError::DuplicateCompetitor(a.name));
        }
        a.reset_score();
        b.reset_score();
        Ok(Self {
            competitors: [a, b],
        })
    }

    /// Build a matchup from a selected roster pair.
    pub fn from_roster(roster: &Roster, pair: (CompetitorId, CompetitorId)) -> Result<Self> {
        let lookup = |id: CompetitorId| {
            roster
                .get(id)
                .cloned()
                .ok_or(RaceError::UnknownCompetitor(id))
        };
        Self::new(lookup(pair.0)?, lookup(pair.1)?)
    }

    /// Set both scores back to zero.
    pub fn reset_scores(&mut self) {
        self.competitors.iter_mut().for_each(Competitor::reset_score);
    }

    /// Current scores as `[A, B]`.
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        [self[Side::A].score, self[Side::B].score]
    }

    /// Names as `[A, B]`.
    #[must_use]
    pub fn names(&self) -> [String; 2] {
        [self[Side::A].name.clone(), self[Side::B].name.clone()]
    }

    /// Iterate over (Side, &Competitor) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &Competitor)> {
        Side::BOTH.into_iter().zip(self.competitors.iter())
    }
}

impl Index<Side> for Matchup {
    type Output = Competitor;

    fn index(&self, side: Side) -> &Competitor {
        &self.competitors[side.index()]
    }
}

impl IndexMut<Side> for Matchup {
    fn index_mut(&mut self, side: Side) -> &mut Competitor {
        &mut self.competitors[side.index()]
    }
}
