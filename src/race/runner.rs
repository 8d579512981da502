//! Race driver: selection, rounds, result.

use tracing::info;

use super::engine::RoundEngine;
use super::matchup::Matchup;
use super::record::RaceRecord;
use super::result::declare_winner;
use super::selector::select_pair;
use crate::core::{RaceConfig, RaceRng, Result, Roster};
use crate::presentation::RaceObserver;

/// One configured race.
#[derive(Clone, Debug)]
pub struct Race {
    config: RaceConfig,
}

impl Race {
    pub fn new(config: RaceConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Run a full race against `roster`.
    ///
    /// The roster is left untouched; the matchup scores its own copies of
    /// the selected competitors.
    pub fn run(&self, roster: &Roster, observer: &mut dyn RaceObserver) -> Result<RaceRecord> {
        let mut rng = match self.config.seed {
            Some(seed) => RaceRng::new(seed),
            None => RaceRng::from_entropy(),
        };
        self.run_with_rng(roster, &mut rng, observer)
    }

    /// Run a full race drawing from an existing RNG.
    ///
    /// The RNG's position on entry is captured in the record, so an RNG that
    /// has already been drawn from still replays correctly.
    pub fn run_with_rng(
        &self,
        roster: &Roster,
        rng: &mut RaceRng,
        observer: &mut dyn RaceObserver,
    ) -> Result<RaceRecord> {
        let seed = rng.seed();
        let rng_state = rng.state();
        let pair = select_pair(roster, rng)?;
        let mut matchup = Matchup::from_roster(roster, pair)?;

        let names = matchup.names();
        info!(seed, a = %names[0], b = %names[1], "race starting");
        observer.on_lineup(&matchup)?;

        let rounds = RoundEngine::new(rng).run(&mut matchup, observer)?;

        let result = declare_winner(&matchup);
        info!(?result, scores = ?matchup.scores(), "race finished");
        observer.on_result(&matchup, &result)?;

        Ok(RaceRecord {
            seed,
            rng_state,
            competitors: names,
            rounds,
            final_scores: matchup.scores(),
            result,
        })
    }
}
