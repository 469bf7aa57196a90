//! Currency codes and conversion into the accounting unit
//!
//! Receipts can be entered in a foreign currency. Conversion happens once,
//! at the caller boundary, using a rate quoted as "1 USD = rate units of the
//! foreign currency". The settlement engine never converts anything.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

/// Code of the accounting unit
pub const ACCOUNTING_CURRENCY: &str = "USD";

/// A free-form currency code (e.g. "EUR", "JPY")
///
/// Codes are trimmed and upper-cased; a blank code means the accounting unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Returns the accounting currency (USD)
    pub fn usd() -> Self {
        Self(ACCOUNTING_CURRENCY.to_string())
    }

    /// Normalizes a user-supplied code
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            Self::usd()
        } else {
            Self(code.to_uppercase())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if amounts in this currency are already normalized
    pub fn is_accounting_unit(&self) -> bool {
        self.0 == ACCOUNTING_CURRENCY
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::usd()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Exchange rate quoted as "1 USD = rate foreign units"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionRate(Decimal);

impl ConversionRate {
    /// Creates a conversion rate
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` for negative rates. A zero rate is
    /// accepted; conversions through it yield zero.
    pub fn new(rate: Decimal) -> Result<Self, CoreError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(CoreError::InvalidRate(format!(
                "Conversion rate cannot be negative: {}",
                rate
            )));
        }
        Ok(Self(rate))
    }

    /// The identity rate used when everything is entered in USD
    pub fn identity() -> Self {
        Self(dec!(1))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Converts a foreign amount into the accounting unit
    ///
    /// A zero rate converts everything to zero instead of dividing by zero.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Money(MoneyError::Overflow)` when the converted
    /// amount cannot be represented (a tiny rate applied to a large amount)
    pub fn to_usd(&self, foreign: Decimal) -> Result<Money, CoreError> {
        if self.0.is_zero() {
            return Ok(Money::zero());
        }
        Ok(Money::new(foreign).divide(self.0)?)
    }

    /// Converts an accounting-unit amount into the foreign currency
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Money(MoneyError::Overflow)` when the product
    /// cannot be represented
    pub fn from_usd(&self, usd: Money) -> Result<Decimal, CoreError> {
        Ok(usd.checked_multiply(self.0)?.amount())
    }

    /// Normalizes an amount entered in `currency`
    ///
    /// Returns the USD amount together with the foreign-currency figure kept
    /// for display. USD entries are passed through and their foreign figure
    /// is derived with the rate.
    pub fn normalize(
        &self,
        amount: Decimal,
        currency: &CurrencyCode,
    ) -> Result<(Money, Decimal), CoreError> {
        if currency.is_accounting_unit() {
            let usd = Money::new(amount);
            Ok((usd, self.from_usd(usd)?))
        } else {
            Ok((self.to_usd(amount)?, amount))
        }
    }
}

impl Default for ConversionRate {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
