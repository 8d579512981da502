//! Core race types: competitors, roster, RNG, configuration, errors.
//!
//! Nothing here knows about rounds or scoring rules; those live in `race`.

pub mod competitor;
pub mod config;
pub mod error;
pub mod rng;
pub mod roster;

pub use competitor::{Competitor, CompetitorId, Side};
pub use config::{Pacing, RaceConfig};
pub use error::{RaceError, Result};
pub use rng::{RaceRng, RaceRngState, DIE_FACES};
pub use roster::{Roster, MAX_COMPETITORS};
