//! Error types for race setup and reporting.

use thiserror::Error;

use super::competitor::CompetitorId;

/// Errors surfaced by the race library.
///
/// Any error is fatal to the match in progress.
#[derive(Debug, Error)]
pub enum RaceError {
    #[error("insufficient competitors: need at least 2, found {found}")]
    InsufficientCompetitors { found: usize },

    #[error("roster too large: at most 256 competitors, found {found}")]
    RosterTooLarge { found: usize },

    #[error("unknown competitor: {0} is not in the roster")]
    UnknownCompetitor(CompetitorId),

    #[error("duplicate competitor name: {0}")]
    DuplicateCompetitor(String),

    #[error("console output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RaceError>;
