//! # kart-race
//!
//! A turn-based dice race between two competitors.
//!
//! ## Rules
//!
//! Two distinct competitors are drawn from a roster and race exactly five
//! rounds. Each round draws a block:
//!
//! - **Straight**: die + speed, higher total scores a point
//! - **Curve**: die + handling, higher total scores a point
//! - **Clash**: die + power, lower total loses a point if it has one
//!
//! The higher final score wins; equal scores tie.
//!
//! ## Determinism
//!
//! All randomness flows through an injected, seedable [`RaceRng`]. The same
//! seed and roster always produce the same [`RaceRecord`]. Console pacing is
//! configured separately and never affects outcomes.
//!
//! ## Modules
//!
//! - `core`: competitors, roster, RNG, configuration, errors
//! - `race`: selector, blocks, round engine, result, record
//! - `presentation`: observer hooks and the console reporter
//!
//! ```
//! use kart_race::{NullObserver, Race, RaceConfig, Roster};
//!
//! let race = Race::new(RaceConfig::default().with_seed(7));
//! let record = race.run(&Roster::classic(), &mut NullObserver).unwrap();
//! assert_eq!(record.rounds.len(), 5);
//! ```

pub mod core;
pub mod presentation;
pub mod race;

// Re-export commonly used types
pub use crate::core::{
    Competitor, CompetitorId, Side,
    Pacing, RaceConfig,
    RaceError, Result,
    RaceRng, RaceRngState,
    Roster,
};

pub use crate::race::{
    BlockType, Matchup, Race, RaceRecord, RaceResult,
    RoundEngine, RoundOutcome, ScoreChange, ROUNDS,
    declare_winner, resolve_round, select_pair,
};

pub use crate::presentation::{ConsoleReporter, NullObserver, RaceObserver};
