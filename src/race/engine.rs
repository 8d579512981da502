//! The round engine.
//!
//! A race is exactly [`ROUNDS`] rounds, run strictly in order. Each round:
//!
//! 1. draws a [`BlockType`] with one unit draw,
//! 2. rolls one die for side A, then one for side B,
//! 3. resolves the block's scoring rule via [`resolve_round`],
//! 4. mutates at most one competitor's score.
//!
//! There is no early termination. Presentation hooks are delivered to a
//! [`RaceObserver`] between steps; the observer cannot influence scoring.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use super::block::BlockType;
use super::matchup::Matchup;
use crate::core::{RaceRng, Result, Side};
use crate::presentation::RaceObserver;

/// Number of rounds in every race.
pub const ROUNDS: u32 = 5;

/// The score effect of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreChange {
    /// Straight or curve winner gained a point.
    Scored(Side),
    /// Clash loser lost a point.
    Lost(Side),
    /// Clash loser had no point to lose.
    Shielded(Side),
    /// Equal totals; nothing changed.
    Tie,
}

/// Transient record of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round number.
    pub round: u32,
    pub block: BlockType,
    pub roll_a: u32,
    pub roll_b: u32,
    /// Die plus the tested attribute.
    pub total_a: u32,
    pub total_b: u32,
    pub change: ScoreChange,
}

impl RoundOutcome {
    /// Die roll for a side.
    #[must_use]
    pub fn roll(&self, side: Side) -> u32 {
        match side {
            Side::A => self.roll_a,
            Side::B => self.roll_b,
        }
    }

    /// Total for a side.
    #[must_use]
    pub fn total(&self, side: Side) -> u32 {
        match side {
            Side::A => self.total_a,
            Side::B => self.total_b,
        }
    }
}

/// Resolve one round with known dice and apply its score change.
///
/// - STRAIGHT / CURVE: the higher total gains a point.
/// - CLASH: the lower total loses a point if it has one; the higher total
///   gains nothing.
/// - Equal totals never change a score.
pub fn resolve_round(
    round: u32,
    block: BlockType,
    roll_a: u32,
    roll_b: u32,
    matchup: &mut Matchup,
) -> RoundOutcome {
    // Rolls are caller-supplied; saturate rather than overflow
    let total_a = roll_a.saturating_add(block.attribute(&matchup[Side::A]));
    let total_b = roll_b.saturating_add(block.attribute(&matchup[Side::B]));

    let leader = match total_a.cmp(&total_b) {
        Ordering::Greater => Some(Side::A),
        Ordering::Less => Some(Side::B),
        Ordering::Equal => None,
    };

    let change = match (block, leader) {
        (_, None) => ScoreChange::Tie,
        (BlockType::Straight | BlockType::Curve, Some(winner)) => {
            matchup[winner].gain_point();
            ScoreChange::Scored(winner)
        }
        (BlockType::Clash, Some(winner)) => {
            let loser = winner.opponent();
            if matchup[loser].lose_point() {
                ScoreChange::Lost(loser)
            } else {
                ScoreChange::Shielded(loser)
            }
        }
    };

    debug!(round, %block, roll_a, roll_b, total_a, total_b, ?change, "round resolved");

    RoundOutcome {
        round,
        block,
        roll_a,
        roll_b,
        total_a,
        total_b,
        change,
    }
}

/// Runs the fixed sequence of rounds for a matchup.
pub struct RoundEngine<'a> {
    rng: &'a mut RaceRng,
}

impl<'a> RoundEngine<'a> {
    /// Create an engine drawing from `rng`.
    pub fn new(rng: &'a mut RaceRng) -> Self {
        Self { rng }
    }

    /// Play one round: draw the block, roll both dice, resolve.
    pub fn play_round(
        &mut self,
        round: u32,
        matchup: &mut Matchup,
        observer: &mut dyn RaceObserver,
    ) -> Result<RoundOutcome> {
        observer.on_round_start(round)?;

        let block = BlockType::draw(self.rng);
        observer.on_block(round, block)?;

        let roll_a = self.rng.roll_die();
        let roll_b = self.rng.roll_die();

        let outcome = resolve_round(round, block, roll_a, roll_b, matchup);
        observer.on_round_resolved(matchup, &outcome)?;

        Ok(outcome)
    }

    /// Play all [`ROUNDS`] rounds in order.
    pub fn run(
        &mut self,
        matchup: &mut Matchup,
        observer: &mut dyn RaceObserver,
    ) -> Result<Vec<RoundOutcome>> {
        let mut outcomes = Vec::with_capacity(ROUNDS as usize);

        for round in 1..=ROUNDS {
            outcomes.push(self.play_round(round, matchup, observer)?);
            if round < ROUNDS {
                observer.on_between_rounds(round)?;
            }
        }

        Ok(outcomes)
    }
}
