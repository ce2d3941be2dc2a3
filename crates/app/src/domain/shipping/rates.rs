//! Shipping cost calculation.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Flat shipping fee charged on any order with physical items.
pub const DEFAULT_BASE_RATE: u64 = 500;

/// Surcharge per physical unit shipped.
pub const DEFAULT_PER_ITEM_RATE: u64 = 100;

/// Country shipped to without the international multiplier.
pub const DEFAULT_HOME_COUNTRY: &str = "US";

/// Shipping rate table, all amounts in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRates {
    pub base: u64,
    pub per_item: u64,
    pub home_country: String,
    pub international_multiplier: Decimal,
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_RATE,
            per_item: DEFAULT_PER_ITEM_RATE,
            home_country: DEFAULT_HOME_COUNTRY.to_string(),
            international_multiplier: Decimal::new(15, 1),
        }
    }
}

impl ShippingRates {
    /// Multiplier for shipping to `country`; unknown destinations ship as domestic.
    #[must_use]
    pub fn multiplier(&self, country: Option<&str>) -> Decimal {
        match country {
            Some(country) if !country.eq_ignore_ascii_case(&self.home_country) => {
                self.international_multiplier
            }
            _ => Decimal::ONE,
        }
    }

    /// Cost of shipping `physical_quantity` physical units to `country`,
    /// rounded half-up to minor units. Zero when nothing physical ships.
    #[must_use]
    pub fn cost(&self, physical_quantity: u64, country: Option<&str>) -> u64 {
        if physical_quantity == 0 {
            return 0;
        }

        let raw = self
            .base
            .saturating_add(self.per_item.saturating_mul(physical_quantity));

        (Decimal::from(raw) * self.multiplier(country))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .unwrap_or(u64::MAX)
    }
}
