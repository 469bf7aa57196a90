//! API configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{ConversionRate, CoreError, CurrencyCode};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Initial conversion rate, as "1 USD = rate foreign"
    pub default_conversion_rate: Decimal,
    /// Initial foreign currency code; empty means USD only
    pub foreign_currency: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            default_conversion_rate: Decimal::ONE,
            foreign_currency: String::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Conversion rate the session starts with
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` if the configured rate is negative
    pub fn conversion_rate(&self) -> Result<ConversionRate, CoreError> {
        ConversionRate::new(self.default_conversion_rate)
    }

    /// Foreign currency the session starts with
    pub fn currency(&self) -> CurrencyCode {
        CurrencyCode::parse(&self.foreign_currency)
    }
}
