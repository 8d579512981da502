//! Console reporter with paced output.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::core::{Pacing, Result, Side};
use crate::race::{BlockType, Matchup, RaceResult, RoundOutcome, ScoreChange};

use super::observer::RaceObserver;

const SEPARATOR: &str = "--------------------------------------------------------";
const DICE_TICKS: usize = 3;

/// Prints a race to any writer, pausing between lines per [`Pacing`].
pub struct ConsoleReporter<W: Write> {
    out: W,
    pacing: Pacing,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, pacing: Pacing) -> Self {
        Self { out, pacing }
    }

    /// Recover the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn pause(&mut self, duration: Duration) -> Result<()> {
        if !duration.is_zero() {
            self.out.flush()?;
            thread::sleep(duration);
        }
        Ok(())
    }

    fn roll_line(&mut self, matchup: &Matchup, outcome: &RoundOutcome, side: Side) -> Result<()> {
        let competitor = &matchup[side];
        let attribute = outcome.block.attribute(competitor);
        writeln!(
            self.out,
            "{} rolled {} {} + {} = {}",
            competitor.name,
            outcome.block.attribute_name(),
            outcome.roll(side),
            attribute,
            outcome.total(side),
        )?;
        Ok(())
    }
}

impl<W: Write> RaceObserver for ConsoleReporter<W> {
    fn on_lineup(&mut self, matchup: &Matchup) -> Result<()> {
        writeln!(self.out, "Randomly selected competitors:")?;
        for (side, c) in matchup.iter() {
            let slot = match side {
                Side::A => 1,
                Side::B => 2,
            };
            writeln!(
                self.out,
                "  Player {}: {} (Speed: {}, Handling: {}, Power: {})",
                slot, c.name, c.speed, c.handling, c.power
            )?;
        }
        writeln!(
            self.out,
            "\nRace between {} and {} starting...\n",
            matchup[Side::A].name,
            matchup[Side::B].name
        )?;
        Ok(())
    }

    fn on_round_start(&mut self, round: u32) -> Result<()> {
        writeln!(self.out, "Round {}", round)?;
        self.pause(self.pacing.round_start)?;

        write!(self.out, "Rolling dice")?;
        for _ in 0..DICE_TICKS {
            self.pause(self.pacing.dice_tick)?;
            write!(self.out, ".")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn on_block(&mut self, _round: u32, block: BlockType) -> Result<()> {
        writeln!(self.out, "Block: {}", block)?;
        self.pause(self.pacing.after_block)
    }

    fn on_round_resolved(&mut self, matchup: &Matchup, outcome: &RoundOutcome) -> Result<()> {
        let a = matchup[Side::A].name.as_str();
        let b = matchup[Side::B].name.as_str();

        if outcome.block == BlockType::Clash {
            writeln!(self.out, "{} clashed with {}!", a, b)?;
        }
        self.roll_line(matchup, outcome, Side::A)?;
        self.roll_line(matchup, outcome, Side::B)?;

        match outcome.change {
            ScoreChange::Scored(side) => {
                writeln!(self.out, "{} scored a point.", matchup[side].name)?;
            }
            ScoreChange::Lost(side) => {
                writeln!(
                    self.out,
                    "{} won the clash! {} lost 1 point",
                    matchup[side.opponent()].name,
                    matchup[side].name
                )?;
            }
            ScoreChange::Shielded(side) => {
                writeln!(
                    self.out,
                    "{} won the clash! {} had no points to lose",
                    matchup[side.opponent()].name,
                    matchup[side].name
                )?;
            }
            ScoreChange::Tie if outcome.block == BlockType::Clash => {
                writeln!(self.out, "Clash tied, no points lost")?;
            }
            ScoreChange::Tie => {}
        }

        writeln!(self.out, "{}", SEPARATOR)?;
        Ok(())
    }

    fn on_between_rounds(&mut self, _round: u32) -> Result<()> {
        self.pause(self.pacing.between_rounds)
    }

    fn on_result(&mut self, matchup: &Matchup, result: &RaceResult) -> Result<()> {
        writeln!(self.out, "Final result:")?;
        for (_, c) in matchup.iter() {
            writeln!(self.out, "{}: {} point(s)", c.name, c.score)?;
        }

        match result {
            RaceResult::Winner(side) => {
                writeln!(self.out, "\n{} won the race! Congratulations!", matchup[*side].name)?;
            }
            RaceResult::Tie => writeln!(self.out, "The race ended in a tie")?,
        }
        self.out.flush()?;
        Ok(())
    }
}
