//! Storefront Domain Concerns

use jiff::{Timestamp, civil::Date, tz::TimeZone};

pub mod categories;
pub mod customers;
pub mod discounts;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod shipping;

/// The current calendar date in UTC, used for discount expiry.
#[must_use]
pub fn today() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}
