//! Random selection of the two competitors for a match.

use tracing::debug;

use crate::core::{CompetitorId, RaceError, RaceRng, Result, Roster};

/// Pick two distinct competitors from `roster`.
///
/// The first pick is uniform. The second is drawn uniformly and redrawn
/// until its name differs from the first, so the number of draws is not
/// fixed but the result is uniform over ordered distinct pairs.
///
/// Fails with [`RaceError::InsufficientCompetitors`] before drawing when the
/// roster holds fewer than two competitors.
pub fn select_pair(roster: &Roster, rng: &mut RaceRng) -> Result<(CompetitorId, CompetitorId)> {
    if roster.len() < 2 {
        return Err(RaceError::InsufficientCompetitors {
            found: roster.len(),
        });
    }

    let first = draw(roster, rng);
    let first_name = name_of(roster, first);

    let mut rejected = 0u32;
    loop {
        let second = draw(roster, rng);
        if name_of(roster, second) != first_name {
            debug!(first = %first_name, second = %name_of(roster, second), rejected, "selected pair");
            return Ok((first, second));
        }
        rejected += 1;
    }
}

fn draw(roster: &Roster, rng: &mut RaceRng) -> CompetitorId {
    CompetitorId(rng.gen_index(roster.len()) as u8)
}

fn name_of(roster: &Roster, id: CompetitorId) -> &str {
    // ids come from `draw`, which stays inside the roster
    roster.get(id).map_or("", |c| c.name.as_str())
}
