//! Receipt line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{
    dedup_preserving_order, ConversionRate, CoreError, CurrencyCode, Money, ParticipantName,
};

/// One priced line within a receipt, split among a subset of participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Label shown on the receipt
    pub name: String,
    /// Price in the accounting unit
    pub price_usd: Money,
    /// Price as entered in the receipt currency (display only)
    pub price_foreign: Decimal,
    /// People who split this item; may include the payer
    pub shared_with: Vec<ParticipantName>,
}

impl Item {
    /// Creates an item priced in USD
    ///
    /// Repeated names in `shared_with` are collapsed.
    pub fn new(
        name: impl Into<String>,
        price_usd: Money,
        shared_with: Vec<ParticipantName>,
    ) -> Self {
        Self {
            name: name.into(),
            price_usd,
            price_foreign: price_usd.amount(),
            shared_with: dedup_preserving_order(&shared_with),
        }
    }

    /// Sets the foreign-currency price kept for display
    pub fn with_foreign_price(mut self, price_foreign: Decimal) -> Self {
        self.price_foreign = price_foreign;
        self
    }

    /// Returns the distinct people splitting this item, in entry order
    pub fn sharers(&self) -> Vec<ParticipantName> {
        dedup_preserving_order(&self.shared_with)
    }

    /// Returns true if `person` shares this item
    pub fn is_shared_with(&self, person: &str) -> bool {
        self.shared_with.iter().any(|p| p.as_str() == person)
    }
}

/// An item as typed into the entry form, in the receipt's currency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    /// Price in the currency the receipt is entered in
    pub price: Decimal,
    #[serde(default)]
    pub shared_with: Vec<ParticipantName>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: Decimal, shared_with: Vec<ParticipantName>) -> Self {
        Self {
            name: name.into(),
            price,
            shared_with,
        }
    }

    /// Converts the entered price into the accounting unit
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Money` when the price cannot be converted at `rate`
    pub fn normalize(&self, currency: &CurrencyCode, rate: &ConversionRate) -> Result<Item, CoreError> {
        let (price_usd, price_foreign) = rate.normalize(self.price, currency)?;
        Ok(Item::new(self.name.clone(), price_usd, self.shared_with.clone())
            .with_foreign_price(price_foreign))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn names(list: &[&str]) -> Vec<ParticipantName> {
        list.iter().map(|n| ParticipantName::from(*n)).collect()
    }

    #[test]
    fn test_item_collapses_repeated_sharers() {
        let item = Item::new("Pizza", Money::new(dec!(12)), names(&["A", "B", "A"]));
        assert_eq!(item.shared_with, names(&["A", "B"]));
        assert!(item.is_shared_with("B"));
        assert!(!item.is_shared_with("C"));
    }

    #[test]
    fn test_foreign_draft_normalizes_with_rate() {
        let draft = ItemDraft::new("Ramen", dec!(1500), names(&["A"]));
        let rate = ConversionRate::new(dec!(150)).unwrap();
        let item = draft.normalize(&CurrencyCode::parse("JPY"), &rate).unwrap();

        assert_eq!(item.price_usd.amount(), dec!(10));
        assert_eq!(item.price_foreign, dec!(1500));
    }
}
