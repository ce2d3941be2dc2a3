//! Shipping Config

use clap::Args;
use rust_decimal::Decimal;
use storefront_app::domain::shipping::{
    ShippingRates,
    rates::{DEFAULT_BASE_RATE, DEFAULT_HOME_COUNTRY, DEFAULT_PER_ITEM_RATE},
};

/// Shipping rate settings, amounts in minor units.
#[derive(Debug, Args)]
pub struct ShippingConfig {
    /// Flat fee for any order containing physical items.
    #[arg(long, env = "SHIPPING_BASE_RATE", default_value_t = DEFAULT_BASE_RATE)]
    pub shipping_base_rate: u64,

    /// Surcharge per physical unit shipped.
    #[arg(long, env = "SHIPPING_PER_ITEM_RATE", default_value_t = DEFAULT_PER_ITEM_RATE)]
    pub shipping_per_item_rate: u64,

    /// ISO 3166-1 alpha-2 code of the domestic market.
    #[arg(long, env = "SHIPPING_HOME_COUNTRY", default_value = DEFAULT_HOME_COUNTRY)]
    pub shipping_home_country: String,

    /// Multiplier applied when shipping abroad.
    #[arg(
        long,
        env = "SHIPPING_INTERNATIONAL_MULTIPLIER",
        default_value = "1.5",
        value_parser = parse_multiplier
    )]
    pub shipping_international_multiplier: Decimal,
}

impl ShippingConfig {
    /// Build the rate table handed to the orders service.
    #[must_use]
    pub fn rates(&self) -> ShippingRates {
        ShippingRates {
            base: self.shipping_base_rate,
            per_item: self.shipping_per_item_rate,
            home_country: self.shipping_home_country.trim().to_ascii_uppercase(),
            international_multiplier: self.shipping_international_multiplier,
        }
    }
}

fn parse_multiplier(value: &str) -> Result<Decimal, String> {
    let multiplier: Decimal = value
        .trim()
        .parse()
        .map_err(|error| format!("invalid multiplier `{value}`: {error}"))?;

    if multiplier.is_sign_negative() {
        return Err(format!("multiplier must not be negative, got {multiplier}"));
    }

    Ok(multiplier)
}
