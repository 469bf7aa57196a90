//! Money in the single accounting unit
//!
//! Every amount that reaches the settlement engine has already been
//! normalized to USD, so `Money` carries no currency of its own. Amounts
//! keep full `rust_decimal` precision until they are explicitly rounded
//! to cents, which keeps proportional tax/tip allocation from being
//! double-rounded.
//!
//! Operators (`+`, `-`, `*`) panic on overflow the same way `Decimal` does.
//! Code handling user-entered amounts goes through the `checked_*` methods,
//! which report [`MoneyError::Overflow`] instead.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use thiserror::Error;

/// Number of decimal places used for settlement amounts
pub const CENT_PLACES: u32 = 2;

/// Symbol of the accounting unit
pub const ACCOUNTING_SYMBOL: &str = "$";

/// Rounds a decimal to cents using banker's rounding (round half to even)
///
/// This is the one rounding convention used for item splits, balances
/// and transfers alike.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Amount out of range")]
    Overflow,
}

/// An amount in the accounting unit (USD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value without rounding
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates Money from an integer amount of cents
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, CENT_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs())
    }

    /// Returns the smaller of two amounts
    pub fn min(self, other: Money) -> Money {
        if self <= other { self } else { other }
    }

    /// Rounds to cents with banker's rounding
    pub fn round_to_cents(&self) -> Self {
        Self::new(round_to_cents(self.amount))
    }

    pub fn checked_add(self, other: Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    pub fn checked_sub(self, other: Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Multiplies by a scalar (e.g., an allocation ratio)
    pub fn checked_multiply(&self, factor: Decimal) -> Result<Money, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Adds up amounts, stopping at the first sum that cannot be represented
    pub fn checked_sum<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(divisor)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Returns the ratio of this amount to `whole`
    pub fn ratio_of(&self, whole: Money) -> Result<Decimal, MoneyError> {
        if whole.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(whole.amount)
            .ok_or(MoneyError::Overflow)
    }

    /// Splits the amount evenly between `parts` people, rounding each share to cents
    ///
    /// Shares are rounded independently; the rounding residue is not
    /// redistributed, so `share * parts` may differ from the original by
    /// up to half a cent per part.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when `parts` is zero
    pub fn split_evenly(&self, parts: usize) -> Result<Money, MoneyError> {
        if parts == 0 {
            return Err(MoneyError::InvalidAmount(
                "Cannot split between zero people".to_string(),
            ));
        }
        Ok(self.divide(Decimal::from(parts))?.round_to_cents())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = round_to_cents(self.amount);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        write!(
            f,
            "{}{}{:.dp$}",
            sign,
            ACCOUNTING_SYMBOL,
            rounded.abs(),
            dp = CENT_PLACES as usize
        )
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.amount += other.amount;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.amount -= other.amount;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_keeps_full_precision() {
        let m = Money::new(dec!(10) / dec!(3));
        assert!(m.amount() > dec!(3.3333));
        assert_eq!(m.round_to_cents().amount(), dec!(3.33));
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_to_cents(dec!(0.125)), dec!(0.12));
        assert_eq!(round_to_cents(dec!(0.135)), dec!(0.14));
        assert_eq!(round_to_cents(dec!(-0.125)), dec!(-0.12));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(10)).to_string(), "$10.00");
        assert_eq!(Money::new(dec!(3.456)).to_string(), "$3.46");
        assert_eq!(Money::new(dec!(-11)).to_string(), "-$11.00");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "$0.00");
    }

    #[test]
    fn test_split_evenly() {
        let m = Money::new(dec!(22));
        assert_eq!(m.split_evenly(2).unwrap().amount(), dec!(11.00));
        assert_eq!(Money::new(dec!(10)).split_evenly(3).unwrap().amount(), dec!(3.33));
        assert!(matches!(m.split_evenly(0), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_ratio_of_zero_whole() {
        let part = Money::new(dec!(5));
        assert_eq!(part.ratio_of(Money::zero()), Err(MoneyError::DivisionByZero));
        assert_eq!(part.ratio_of(Money::new(dec!(20))).unwrap(), dec!(0.25));
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::new(dec!(1))), Err(MoneyError::Overflow));
        assert_eq!((-max).checked_sub(Money::new(dec!(1))), Err(MoneyError::Overflow));
        assert_eq!(max.checked_multiply(dec!(2)), Err(MoneyError::Overflow));
        assert_eq!(Money::new(dec!(100)).divide(dec!(0.0000000000000000000000000001)), Err(MoneyError::Overflow));
        assert_eq!(max.checked_add(-max), Ok(Money::zero()));
    }

    #[test]
    fn test_checked_sum() {
        let parts = [Money::new(dec!(1.10)), Money::new(dec!(2.20))];
        assert_eq!(Money::checked_sum(parts).unwrap().amount(), dec!(3.30));
        assert_eq!(Money::checked_sum(Vec::new()), Ok(Money::zero()));

        let huge = Money::new(dec!(50000000000000000000000000000));
        assert_eq!(Money::checked_sum([huge, huge]), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_serializes_as_plain_decimal() {
        let json = serde_json::to_string(&Money::new(dec!(12.50))).unwrap();
        assert_eq!(json, "\"12.50\"");
    }
}
