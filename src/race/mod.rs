//! Race rules: competitor selection, blocks, the round engine and results.
//!
//! - `selector`: draw two distinct competitors from a roster
//! - `matchup`: the two competitors of one match
//! - `block`: block types and their thresholds
//! - `engine`: the five-round state machine
//! - `result`: winner / tie
//! - `record`: serializable race transcript
//! - `runner`: ties the above together

pub mod block;
pub mod engine;
pub mod matchup;
pub mod record;
pub mod result;
pub mod runner;
pub mod selector;

pub use block::{BlockType, CURVE_THRESHOLD, STRAIGHT_THRESHOLD};
pub use engine::{resolve_round, RoundEngine, RoundOutcome, ScoreChange, ROUNDS};
pub use matchup::Matchup;
pub use record::RaceRecord;
pub use result::{declare_winner, RaceResult};
pub use runner::Race;
pub use selector::select_pair;
