//! Discounts Data

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::domain::discounts::{errors::DiscountsServiceError, records::DiscountUuid};

/// Longest discount name accepted.
pub const MAX_DISCOUNT_NAME_CHARS: usize = 100;

/// New Discount Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiscount {
    pub uuid: DiscountUuid,
    pub name: String,
    pub percentage: Decimal,
    pub active: bool,
    pub expires_on: Date,
}

impl NewDiscount {
    /// Check the discount can be created on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountsServiceError::InvalidData`] for a blank or overlong name
    /// or a percentage outside `0.0..=100.0` with more than one decimal place, and
    /// [`DiscountsServiceError::ExpiryNotInFuture`] unless `expires_on` is after `today`.
    pub fn validate(&self, today: Date) -> Result<(), DiscountsServiceError> {
        let name_chars = self.name.trim().chars().count();

        if !(1..=MAX_DISCOUNT_NAME_CHARS).contains(&name_chars) {
            return Err(DiscountsServiceError::InvalidData);
        }

        if self.percentage < Decimal::ZERO
            || self.percentage > Decimal::ONE_HUNDRED
            || self.percentage.round_dp(1) != self.percentage
        {
            return Err(DiscountsServiceError::InvalidData);
        }

        if self.expires_on <= today {
            return Err(DiscountsServiceError::ExpiryNotInFuture);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn discount(percentage: Decimal, expires_on: Date) -> NewDiscount {
        NewDiscount {
            uuid: DiscountUuid::new(),
            name: "Summer sale".to_string(),
            percentage,
            active: true,
            expires_on,
        }
    }

    #[test]
    fn accepts_future_expiry_and_single_decimal_place() {
        let today = date(2026, 6, 1);

        assert!(discount(Decimal::new(125, 1), date(2026, 6, 2)).validate(today).is_ok());
        assert!(discount(Decimal::ZERO, date(2027, 1, 1)).validate(today).is_ok());
        assert!(discount(Decimal::ONE_HUNDRED, date(2027, 1, 1)).validate(today).is_ok());
    }

    #[test]
    fn rejects_expiry_today_or_earlier() {
        let today = date(2026, 6, 1);

        assert!(matches!(
            discount(Decimal::TEN, today).validate(today),
            Err(DiscountsServiceError::ExpiryNotInFuture)
        ));
        assert!(matches!(
            discount(Decimal::TEN, date(2026, 5, 31)).validate(today),
            Err(DiscountsServiceError::ExpiryNotInFuture)
        ));
    }

    #[test]
    fn rejects_out_of_range_or_too_precise_percentages() {
        let today = date(2026, 6, 1);
        let expires_on = date(2026, 7, 1);

        for percentage in [Decimal::new(-1, 1), Decimal::new(1001, 1), Decimal::new(1225, 2)] {
            assert!(
                matches!(
                    discount(percentage, expires_on).validate(today),
                    Err(DiscountsServiceError::InvalidData)
                ),
                "{percentage} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_blank_name() {
        let mut new_discount = discount(Decimal::TEN, date(2026, 7, 1));
        new_discount.name = " ".to_string();

        assert!(matches!(
            new_discount.validate(date(2026, 6, 1)),
            Err(DiscountsServiceError::InvalidData)
        ));
    }
}
