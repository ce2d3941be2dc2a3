//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    shipping::ShippingConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod shipping;

pub(crate) use observability::LogFormat;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Shipping rate table used for cart totals.
    #[command(flatten)]
    pub shipping: ShippingConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["storefront-json", "--database-url", "postgres://db"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.server.shutdown_grace_period().as_secs(), 10);
        assert_eq!(config.database.database_url, "postgres://db");
        assert_eq!(config.shipping.shipping_base_rate, 500);
        assert_eq!(config.shipping.shipping_per_item_rate, 100);
        assert_eq!(config.shipping.shipping_home_country, "US");
        assert_eq!(
            config.shipping.shipping_international_multiplier,
            Decimal::new(15, 1)
        );

        Ok(())
    }

    #[test]
    fn tracing_export_is_opt_in() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["storefront-json", "--database-url", "postgres://db"])?;

        assert!(!config.observability.otel_enabled, "otel should default off");
        assert_eq!(config.logging.log_format, LogFormat::Compact);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn shipping_flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://db",
            "--shipping-base-rate",
            "0",
            "--shipping-home-country",
            "gb",
            "--shipping-international-multiplier",
            "2.25",
        ])?;

        let rates = config.shipping.rates();

        assert_eq!(rates.base, 0);
        assert_eq!(rates.home_country, "GB");
        assert_eq!(rates.international_multiplier, Decimal::new(225, 2));

        Ok(())
    }

    #[test]
    fn non_numeric_multiplier_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://db",
            "--shipping-international-multiplier",
            "lots",
        ]);

        assert!(result.is_err(), "expected parse failure for bad multiplier");
    }

    #[test]
    fn negative_multiplier_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://db",
            "--shipping-international-multiplier=-1.5",
        ]);

        assert!(result.is_err(), "negative multiplier should fail to parse");
    }

    #[test]
    fn zero_multiplier_is_accepted() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://db",
            "--shipping-international-multiplier",
            "0",
        ])?;

        assert_eq!(
            config.shipping.shipping_international_multiplier,
            Decimal::ZERO
        );

        Ok(())
    }
}
