//! Observer hooks fired while a race runs.

use crate::core::Result;
use crate::race::{BlockType, Matchup, RaceResult, RoundOutcome};

/// Receives race progress.
///
/// Every hook has a no-op default so implementors only override what they
/// display. Hooks see state after the step they announce; they cannot change
/// scoring.
pub trait RaceObserver {
    /// The two competitors have been selected.
    fn on_lineup(&mut self, _matchup: &Matchup) -> Result<()> {
        Ok(())
    }

    /// A round is about to draw its block.
    fn on_round_start(&mut self, _round: u32) -> Result<()> {
        Ok(())
    }

    /// The round's block has been drawn.
    fn on_block(&mut self, _round: u32, _block: BlockType) -> Result<()> {
        Ok(())
    }

    /// The round has been resolved and scores updated.
    fn on_round_resolved(&mut self, _matchup: &Matchup, _outcome: &RoundOutcome) -> Result<()> {
        Ok(())
    }

    /// Fired after every round except the last.
    fn on_between_rounds(&mut self, _round: u32) -> Result<()> {
        Ok(())
    }

    /// Final scores have been compared.
    fn on_result(&mut self, _matchup: &Matchup, _result: &RaceResult) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RaceObserver for NullObserver {}
