//! Busyness scoring
//!
//! A busyness score expresses an observed head count relative to a
//! destination's rated capacity, scaled so that a destination exactly at
//! capacity scores `10`. Over-capacity readings score above `10`.
//!
//! Scores are computed in decimal arithmetic and rounded to two places,
//! half away from zero (`0.025` becomes `0.03`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on a score
const SCORE_SCALE: u32 = 2;

/// A rated people capacity known to be strictly positive.
///
/// The only way to obtain one is through [`Capacity::new`], so a score can
/// never be computed against a missing or zero capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(i32);

impl Capacity {
    /// Validate a stored `max_people` value
    pub fn new(max_people: i32) -> Option<Self> {
        (max_people > 0).then_some(Self(max_people))
    }

    /// Validate a nullable `max_people` column
    pub fn from_column(max_people: Option<i32>) -> Option<Self> {
        max_people.and_then(Self::new)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Compute `round(raw_count / capacity * 10, 2)`.
pub fn busyness_score(raw_count: i32, capacity: Capacity) -> Decimal {
    // Scaling before dividing keeps exact results exact (45 * 10 / 100).
    let scaled = Decimal::from(raw_count) * Decimal::TEN / Decimal::from(capacity.get());
    scaled.round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
