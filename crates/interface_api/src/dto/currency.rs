//! Currency DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ConversionRate, CurrencyCode};

#[derive(Debug, Deserialize)]
pub struct UpdateCurrencyRequest {
    /// Foreign currency code; empty means USD
    #[serde(default)]
    pub currency: String,
    /// "1 USD = rate foreign"
    pub rate: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    pub currency: CurrencyCode,
    pub rate: ConversionRate,
    /// Human-readable rate, e.g. "1 USD = 0.9000 EUR"
    pub quote: String,
}

impl CurrencyResponse {
    pub fn new(currency: CurrencyCode, rate: ConversionRate) -> Self {
        let quote = format!("1 USD = {} {}", rate, currency);
        Self { currency, rate, quote }
    }
}
