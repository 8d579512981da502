//! The pool of competitors a race draws from.

use serde::{Deserialize, Serialize};

use super::competitor::{Competitor, CompetitorId};
use super::error::{RaceError, Result};

/// Largest roster addressable by `CompetitorId`.
pub const MAX_COMPETITORS: usize = u8::MAX as usize + 1;

/// Static collection of competitor records.
///
/// Names are unique within a roster; the selector relies on this to tell
/// competitors apart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    competitors: Vec<Competitor>,
}

impl Roster {
    /// Build a roster, rejecting duplicate names.
    ///
    /// Small rosters are accepted here; the selector reports them when a
    /// match is attempted.
    pub fn new(competitors: Vec<Competitor>) -> Result<Self> {
        for (i, c) in competitors.iter().enumerate() {
            if competitors[..i].iter().any(|other| other.name == c.name) {
                return Err(RaceError::DuplicateCompetitor(c.name.clone()));
            }
        }
        // CompetitorId is a u8 index
        if competitors.len() > MAX_COMPETITORS {
            return Err(RaceError::RosterTooLarge {
                found: competitors.len(),
            });
        }
        Ok(Self { competitors })
    }

    /// The six classic competitors.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            competitors: vec![
                Competitor::new("Mario", 4, 3, 3),
                Competitor::new("Bowser", 5, 2, 5),
                Competitor::new("Peach", 3, 4, 2),
                Competitor::new("Luigi", 3, 4, 4),
                Competitor::new("Yoshi", 2, 4, 3),
                Competitor::new("Donkey Kong", 2, 2, 5),
            ],
        }
    }

    /// Number of competitors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Look up a competitor by ID.
    #[must_use]
    pub fn get(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.get(id.index())
    }

    /// Set every competitor's score to zero.
    pub fn reset_scores(&mut self) {
        self.competitors.iter_mut().for_each(Competitor::reset_score);
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::classic()
    }
}
