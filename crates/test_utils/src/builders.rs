//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{CurrencyCode, Money, ParticipantName};
use domain_receipt::{Item, ItemDraft, Receipt, ReceiptForm};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Converts string slices into participant names
pub fn names(list: &[&str]) -> Vec<ParticipantName> {
    list.iter().map(|n| ParticipantName::from(*n)).collect()
}

/// Builder for constructing test items
pub struct TestItemBuilder {
    name: String,
    price: Decimal,
    shared_with: Vec<ParticipantName>,
}

impl Default for TestItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestItemBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Lunch".to_string(),
            price: dec!(20.00),
            shared_with: names(&["A", "B"]),
        }
    }

    /// Sets the item name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the USD price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets who shares the item
    pub fn shared_with(mut self, people: &[&str]) -> Self {
        self.shared_with = names(people);
        self
    }

    /// Builds the item
    pub fn build(self) -> Item {
        Item::new(self.name, Money::new(self.price), self.shared_with)
    }
}

/// Builder for constructing test receipts
pub struct TestReceiptBuilder {
    payer: String,
    items: Vec<Item>,
    tax: Decimal,
    tip: Decimal,
}

impl Default for TestReceiptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReceiptBuilder {
    /// Creates a new builder paid by "A" with no items
    pub fn new() -> Self {
        Self {
            payer: "A".to_string(),
            items: Vec::new(),
            tax: Decimal::ZERO,
            tip: Decimal::ZERO,
        }
    }

    /// Sets the payer
    pub fn paid_by(mut self, payer: impl Into<String>) -> Self {
        self.payer = payer.into();
        self
    }

    /// Adds an item shared by `people`
    pub fn item(mut self, name: &str, price: Decimal, people: &[&str]) -> Self {
        self.items.push(
            TestItemBuilder::new()
                .with_name(name)
                .with_price(price)
                .shared_with(people)
                .build(),
        );
        self
    }

    /// Sets the tax
    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    /// Sets the tip
    pub fn with_tip(mut self, tip: Decimal) -> Self {
        self.tip = tip;
        self
    }

    /// Builds the receipt without validation
    pub fn build(self) -> Receipt {
        Receipt::new(
            self.payer,
            self.items,
            Money::new(self.tax),
            Money::new(self.tip),
        )
    }
}

/// Builder for entry forms in an arbitrary currency
pub struct TestReceiptFormBuilder {
    form: ReceiptForm,
}

impl Default for TestReceiptFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestReceiptFormBuilder {
    /// Creates a USD form paid by "A"
    pub fn new() -> Self {
        Self {
            form: ReceiptForm::new("A", CurrencyCode::usd()),
        }
    }

    pub fn paid_by(mut self, payer: impl Into<String>) -> Self {
        self.form.payer = payer.into();
        self
    }

    pub fn in_currency(mut self, code: &str) -> Self {
        self.form.currency = CurrencyCode::parse(code);
        self
    }

    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.form.tax = tax;
        self
    }

    pub fn with_tip(mut self, tip: Decimal) -> Self {
        self.form.tip = tip;
        self
    }

    /// Adds an item priced in the form's currency
    pub fn item(mut self, name: &str, price: Decimal, people: &[&str]) -> Self {
        self.form.items.push(ItemDraft::new(name, price, names(people)));
        self
    }

    pub fn build(self) -> ReceiptForm {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_builder_defaults() {
        let receipt = TestReceiptBuilder::new()
            .item("Lunch", dec!(20), &["A", "B"])
            .build();

        assert_eq!(receipt.payer.as_str(), "A");
        assert_eq!(receipt.total().unwrap().amount(), dec!(20));
    }

    #[test]
    fn test_form_builder_currency() {
        let form = TestReceiptFormBuilder::new()
            .in_currency("jpy")
            .item("Ramen", dec!(1200), &["A"])
            .build();
        assert_eq!(form.currency.as_str(), "JPY");
        assert_eq!(form.items[0].price, dec!(1200));
    }
}
