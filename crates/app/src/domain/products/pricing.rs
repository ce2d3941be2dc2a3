//! Discounted price calculation.

use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::domain::discounts::records::DiscountRecord;

/// Largest percentage among the discounts that apply on `today`.
#[must_use]
pub fn best_discount_percentage(discounts: &[DiscountRecord], today: Date) -> Option<Decimal> {
    discounts
        .iter()
        .filter(|discount| discount.applies_on(today))
        .map(|discount| discount.percentage)
        .max()
}

/// Reduce `price` by `percentage` percent, rounding half-up to minor units.
///
/// Percentages are clamped to `0..=100`, so the result never goes below zero
/// or above the original price.
#[must_use]
pub fn apply_percentage(price: u64, percentage: Decimal) -> u64 {
    let percentage = percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let remaining = (Decimal::ONE_HUNDRED - percentage) / Decimal::ONE_HUNDRED;

    (Decimal::from(price) * remaining)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

/// Price after the best applicable discount.
#[must_use]
pub fn discounted_price(price: u64, discounts: &[DiscountRecord], today: Date) -> u64 {
    best_discount_percentage(discounts, today)
        .map_or(price, |percentage| apply_percentage(price, percentage))
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use crate::domain::discounts::records::DiscountUuid;

    use super::*;

    fn discount(percentage: Decimal, active: bool, expires_on: Date) -> DiscountRecord {
        DiscountRecord {
            uuid: DiscountUuid::new(),
            name: "Sale".to_string(),
            percentage,
            active,
            expires_on,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn no_discounts_keeps_price() {
        assert_eq!(discounted_price(1999, &[], date(2026, 1, 1)), 1999);
    }

    #[test]
    fn uses_the_largest_applicable_discount() {
        let today = date(2026, 3, 1);
        let discounts = [
            discount(Decimal::TEN, true, date(2026, 4, 1)),
            discount(Decimal::new(25, 0), true, date(2026, 3, 1)),
        ];

        assert_eq!(discounted_price(2000, &discounts, today), 1500);
    }

    #[test]
    fn ignores_inactive_and_expired_discounts() {
        let today = date(2026, 3, 1);
        let discounts = [
            discount(Decimal::new(50, 0), false, date(2026, 4, 1)),
            discount(Decimal::new(40, 0), true, date(2026, 2, 28)),
            discount(Decimal::TEN, true, date(2026, 4, 1)),
        ];

        assert_eq!(
            best_discount_percentage(&discounts, today),
            Some(Decimal::TEN)
        );
        assert_eq!(discounted_price(1000, &discounts, today), 900);
    }

    #[test]
    fn rounds_half_up_to_minor_units() {
        // 999 * 0.875 = 874.125
        assert_eq!(apply_percentage(999, Decimal::new(125, 1)), 874);
        // 5 * 0.5 = 2.5
        assert_eq!(apply_percentage(5, Decimal::new(50, 0)), 3);
    }

    #[test]
    fn full_discount_floors_at_zero() {
        assert_eq!(apply_percentage(1234, Decimal::ONE_HUNDRED), 0);
        assert_eq!(apply_percentage(1234, Decimal::new(150, 0)), 0);
    }
}
