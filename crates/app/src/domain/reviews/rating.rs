//! Product rating aggregation.

use std::ops::RangeInclusive;

use rust_decimal::{Decimal, RoundingStrategy};

/// Accepted review ratings.
pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

#[must_use]
pub fn is_valid_rating(rating: u8) -> bool {
    RATING_RANGE.contains(&rating)
}

/// Arithmetic mean of `ratings`, rounded half-up to two decimal places.
/// An unrated product scores zero.
#[must_use]
pub fn average_rating(ratings: &[u8]) -> Decimal {
    if ratings.is_empty() {
        return Decimal::ZERO;
    }

    let sum: u64 = ratings.iter().map(|&rating| u64::from(rating)).sum();

    (Decimal::from(sum) / Decimal::from(ratings.len()))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
