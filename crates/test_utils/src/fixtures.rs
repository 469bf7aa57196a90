//! Pre-built Test Fixtures
//!
//! Provides ready-to-use receipts and conversion rates for the settlement
//! scenarios exercised across the test suite. These fixtures are consistent
//! and predictable.

use core_kernel::ConversionRate;
use domain_receipt::Receipt;
use rust_decimal_macros::dec;

use crate::builders::TestReceiptBuilder;

/// Fixture for receipt test data
pub struct ReceiptFixtures;

impl ReceiptFixtures {
    /// A pays $20 for lunch shared by A and B, no tax or tip
    pub fn shared_lunch() -> Receipt {
        TestReceiptBuilder::new()
            .paid_by("A")
            .item("Lunch", dec!(20), &["A", "B"])
            .build()
    }

    /// The shared lunch with $2 tax
    pub fn shared_lunch_with_tax() -> Receipt {
        TestReceiptBuilder::new()
            .paid_by("A")
            .item("Lunch", dec!(20), &["A", "B"])
            .with_tax(dec!(2))
            .build()
    }

    /// A and B each pay $20 for something they split; balances cancel out
    pub fn mutual_lunches() -> Vec<Receipt> {
        vec![
            TestReceiptBuilder::new()
                .paid_by("A")
                .item("Lunch", dec!(20), &["A", "B"])
                .build(),
            TestReceiptBuilder::new()
                .paid_by("B")
                .item("Dinner", dec!(20), &["A", "B"])
                .build(),
        ]
    }

    /// Every item is free; the receipt contributes nothing
    pub fn zero_subtotal() -> Receipt {
        TestReceiptBuilder::new()
            .paid_by("A")
            .item("Water", dec!(0), &["A", "B"])
            .item("Bread", dec!(0), &["B"])
            .with_tip(dec!(3))
            .build()
    }

    /// A single item for a single person who also paid
    pub fn solo_coffee() -> Receipt {
        TestReceiptBuilder::new()
            .paid_by("A")
            .item("Coffee", dec!(4.50), &["A"])
            .build()
    }

    /// A trip with several payers, uneven splits, tax and tip
    pub fn weekend_trip() -> Vec<Receipt> {
        vec![
            TestReceiptBuilder::new()
                .paid_by("Ann")
                .item("Groceries", dec!(87.40), &["Ann", "Bo", "Cy", "Di"])
                .item("Wine", dec!(32.00), &["Ann", "Cy"])
                .with_tax(dec!(9.55))
                .build(),
            TestReceiptBuilder::new()
                .paid_by("Bo")
                .item("Pizza", dec!(41.00), &["Bo", "Cy", "Di"])
                .item("Salad", dec!(12.50), &["Ann"])
                .with_tax(dec!(4.28))
                .with_tip(dec!(8.00))
                .build(),
            TestReceiptBuilder::new()
                .paid_by("Di")
                .item("Fuel", dec!(60.00), &["Ann", "Bo", "Cy", "Di"])
                .build(),
        ]
    }
}

/// Fixture for conversion rates
pub struct RateFixtures;

impl RateFixtures {
    /// 1 USD = 0.9 EUR
    pub fn eur() -> ConversionRate {
        ConversionRate::new(dec!(0.9)).unwrap()
    }

    /// 1 USD = 150 JPY
    pub fn jpy() -> ConversionRate {
        ConversionRate::new(dec!(150)).unwrap()
    }

    /// The smallest positive rate a `Decimal` can hold
    pub fn smallest() -> ConversionRate {
        ConversionRate::new(dec!(0.0000000000000000000000000001)).unwrap()
    }
}
