//! Track blocks and the attribute each one tests.

use serde::{Deserialize, Serialize};

use crate::core::{Competitor, RaceRng};

/// Upper bound (exclusive) of the unit draw that yields a straight.
pub const STRAIGHT_THRESHOLD: f64 = 0.33;
/// Upper bound (exclusive) of the unit draw that yields a curve.
pub const CURVE_THRESHOLD: f64 = 0.66;

/// The kind of track section a round is raced on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Tests speed; winner scores.
    Straight,
    /// Tests handling; winner scores.
    Curve,
    /// Tests power; loser may lose a point.
    Clash,
}

impl BlockType {
    /// Map a unit draw `r` in `[0, 1)` to a block.
    ///
    /// The thresholds are 0.33 and 0.66, so CLASH is slightly more likely
    /// than the other two.
    #[must_use]
    pub fn from_draw(r: f64) -> Self {
        if r < STRAIGHT_THRESHOLD {
            BlockType::Straight
        } else if r < CURVE_THRESHOLD {
            BlockType::Curve
        } else {
            BlockType::Clash
        }
    }

    /// Draw a block using exactly one unit draw.
    pub fn draw(rng: &mut RaceRng) -> Self {
        Self::from_draw(rng.gen_unit())
    }

    /// The attribute this block tests.
    #[must_use]
    pub fn attribute(self, competitor: &Competitor) -> u32 {
        let value = match self {
            BlockType::Straight => competitor.speed,
            BlockType::Curve => competitor.handling,
            BlockType::Clash => competitor.power,
        };
        u32::from(value)
    }

    /// Display name of the tested attribute.
    #[must_use]
    pub fn attribute_name(self) -> &'static str {
        match self {
            BlockType::Straight => "speed",
            BlockType::Curve => "handling",
            BlockType::Clash => "power",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockType::Straight => "STRAIGHT",
            BlockType::Curve => "CURVE",
            BlockType::Clash => "CLASH",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(BlockType::from_draw(0.0), BlockType::Straight);
        assert_eq!(BlockType::from_draw(0.329), BlockType::Straight);
        assert_eq!(BlockType::from_draw(0.33), BlockType::Curve);
        // Exact thirds are not the boundary
        assert_eq!(BlockType::from_draw(1.0 / 3.0), BlockType::Curve);
        assert_eq!(BlockType::from_draw(0.659), BlockType::Curve);
        assert_eq!(BlockType::from_draw(0.66), BlockType::Clash);
        assert_eq!(BlockType::from_draw(0.665), BlockType::Clash);
        assert_eq!(BlockType::from_draw(0.999), BlockType::Clash);
    }

    #[test]
    fn test_draw_matches_unit_draw() {
        let mut rng = RaceRng::new(11);
        let mut mirror = RaceRng::new(11);

        for _ in 0..100 {
            assert_eq!(BlockType::draw(&mut rng), BlockType::from_draw(mirror.gen_unit()));
        }
    }

    #[test]
    fn test_attribute() {
        let c = Competitor::new("Bowser", 5, 2, 7);
        assert_eq!(BlockType::Straight.attribute(&c), 5);
        assert_eq!(BlockType::Curve.attribute(&c), 2);
        assert_eq!(BlockType::Clash.attribute(&c), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockType::Straight.to_string(), "STRAIGHT");
        assert_eq!(BlockType::Clash.attribute_name(), "power");
    }
}
