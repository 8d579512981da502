//! Competitor records and identifiers.
//!
//! ## CompetitorId
//!
//! Index of a competitor within its roster.
//!
//! ## Side
//!
//! One of the two slots of a match. Every race has exactly a side `A`
//! and a side `B`.

use serde::{Deserialize, Serialize};

/// Roster index of a competitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitorId(pub u8);

impl CompetitorId {
    /// Create a new competitor ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Competitor {}", self.0)
    }
}

/// A slot in a two-competitor match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in race order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Array index of this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// A race participant.
///
/// Attributes are fixed for the lifetime of the record and are `u8` so a
/// die plus any attribute always fits the `u32` round total. `score` is the
/// only mutable field and is owned by whichever match holds the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    /// Tested on straights.
    pub speed: u8,
    /// Tested on curves.
    pub handling: u8,
    /// Tested in clashes.
    pub power: u8,
    pub score: u32,
}

impl Competitor {
    /// Create a competitor with a zero score.
    pub fn new(name: impl Into<String>, speed: u8, handling: u8, power: u8) -> Self {
        Self {
            name: name.into(),
            speed,
            handling,
            power,
            score: 0,
        }
    }

    /// Award one point.
    pub fn gain_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Take one point away if there is one to lose.
    ///
    /// Returns `false` (and leaves the score at zero) when there was none.
    pub fn lose_point(&mut self) -> bool {
        if self.score > 0 {
            self.score -= 1;
            true
        } else {
            false
        }
    }

    /// Clear the score before a new match.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
