//! Discount Records

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Discount UUID
pub type DiscountUuid = TypedUuid<DiscountRecord>;

/// Discount Record
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountRecord {
    pub uuid: DiscountUuid,
    pub name: String,
    pub percentage: Decimal,
    pub active: bool,
    pub expires_on: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DiscountRecord {
    /// Whether the discount counts towards prices on the given day.
    #[must_use]
    pub fn applies_on(&self, today: Date) -> bool {
        self.active && self.expires_on >= today
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn discount(active: bool, expires_on: Date) -> DiscountRecord {
        DiscountRecord {
            uuid: DiscountUuid::new(),
            name: "Spring".to_string(),
            percentage: Decimal::TEN,
            active,
            expires_on,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn active_discount_applies_through_its_expiry_date() {
        let today = date(2026, 5, 1);

        assert!(discount(true, date(2026, 5, 2)).applies_on(today));
        assert!(discount(true, today).applies_on(today));
        assert!(!discount(true, date(2026, 4, 30)).applies_on(today));
    }

    #[test]
    fn inactive_discount_never_applies() {
        assert!(!discount(false, date(2030, 1, 1)).applies_on(date(2026, 5, 1)));
    }
}
