//! Receipts and receipt drafts
//!
//! A receipt moves through three shapes:
//!
//! ```text
//! ReceiptForm (entered currency) -> ReceiptDraft (normalized) -> Receipt (validated)
//! ```
//!
//! Only a [`Receipt`] is ever stored in the [`ReceiptBook`](crate::ReceiptBook).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ConversionRate, CurrencyCode, Money, MoneyError, ParticipantName};
use crate::error::ReceiptError;
use crate::item::{Item, ItemDraft};
use crate::validation::ValidationError;

/// Label the entry form shows before a payer is picked
pub const PAYER_PLACEHOLDER: &str = "(Choose a Participant)";

/// One paid transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Who fronted the money
    pub payer: ParticipantName,
    /// Priced lines, in entry order
    pub items: Vec<Item>,
    /// Tax in the accounting unit
    pub tax: Money,
    /// Tip in the accounting unit
    pub tip: Money,
    /// Currency the receipt was entered in
    #[serde(default)]
    pub currency: CurrencyCode,
    /// Tax as entered (display only)
    #[serde(default)]
    pub tax_foreign: Decimal,
    /// Tip as entered (display only)
    #[serde(default)]
    pub tip_foreign: Decimal,
}

impl Receipt {
    /// Creates a receipt entered directly in USD
    pub fn new(payer: impl Into<ParticipantName>, items: Vec<Item>, tax: Money, tip: Money) -> Self {
        Self {
            payer: payer.into(),
            items,
            tax,
            tip,
            currency: CurrencyCode::usd(),
            tax_foreign: tax.amount(),
            tip_foreign: tip.amount(),
        }
    }

    /// Sum of item prices before tax and tip
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` when the sum cannot be represented.
    /// Receipts that passed validation always have a representable total.
    pub fn subtotal(&self) -> Result<Money, MoneyError> {
        Money::checked_sum(self.items.iter().map(|item| item.price_usd))
    }

    /// Amount the payer fronted: subtotal + tax + tip
    pub fn total(&self) -> Result<Money, MoneyError> {
        total_of(&self.items, self.tax, self.tip)
    }

    /// Returns every distinct participant named on the receipt
    pub fn participants(&self) -> Vec<ParticipantName> {
        let mut people = Vec::new();
        for item in &self.items {
            for person in &item.shared_with {
                if !people.contains(person) {
                    people.push(person.clone());
                }
            }
        }
        if !people.contains(&self.payer) {
            people.push(self.payer.clone());
        }
        people
    }
}

pub(crate) fn total_of(items: &[Item], tax: Money, tip: Money) -> Result<Money, MoneyError> {
    Money::checked_sum(items.iter().map(|item| item.price_usd))?
        .checked_add(tax)?
        .checked_add(tip)
}

/// A normalized candidate receipt awaiting validation
///
/// All amounts are already in the accounting unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    pub payer: ParticipantName,
    pub items: Vec<Item>,
    pub tax: Money,
    pub tip: Money,
    pub currency: CurrencyCode,
    pub tax_foreign: Decimal,
    pub tip_foreign: Decimal,
}

impl ReceiptDraft {
    /// Creates a USD draft
    pub fn new(payer: impl Into<ParticipantName>, items: Vec<Item>, tax: Money, tip: Money) -> Self {
        Self {
            payer: payer.into(),
            items,
            tax,
            tip,
            currency: CurrencyCode::usd(),
            tax_foreign: tax.amount(),
            tip_foreign: tip.amount(),
        }
    }

    /// Turns the draft into a receipt. Callers validate first.
    pub(crate) fn into_receipt(self) -> Receipt {
        Receipt {
            payer: self.payer,
            items: self.items,
            tax: self.tax,
            tip: self.tip,
            currency: self.currency,
            tax_foreign: self.tax_foreign,
            tip_foreign: self.tip_foreign,
        }
    }
}

impl From<Receipt> for ReceiptDraft {
    fn from(receipt: Receipt) -> Self {
        Self {
            payer: receipt.payer,
            items: receipt.items,
            tax: receipt.tax,
            tip: receipt.tip,
            currency: receipt.currency,
            tax_foreign: receipt.tax_foreign,
            tip_foreign: receipt.tip_foreign,
        }
    }
}

/// Receipt data as entered, in the receipt's own currency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptForm {
    #[serde(default)]
    pub payer: String,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub tax: Decimal,
    #[serde(default)]
    pub tip: Decimal,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
}

impl ReceiptForm {
    pub fn new(payer: impl Into<String>, currency: CurrencyCode) -> Self {
        Self {
            payer: payer.into(),
            currency,
            ..Default::default()
        }
    }

    pub fn with_tax(mut self, tax: Decimal) -> Self {
        self.tax = tax;
        self
    }

    pub fn with_tip(mut self, tip: Decimal) -> Self {
        self.tip = tip;
        self
    }

    pub fn with_item(mut self, item: ItemDraft) -> Self {
        self.items.push(item);
        self
    }

    /// Converts every amount into the accounting unit
    ///
    /// The payer placeholder is treated as no payer.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Validation` listing every amount that cannot
    /// be converted at `rate`
    pub fn normalize(&self, rate: &ConversionRate) -> Result<ReceiptDraft, ReceiptError> {
        let payer = if self.payer.trim() == PAYER_PLACEHOLDER {
            String::new()
        } else {
            self.payer.clone()
        };

        let mut errors = Vec::new();
        let tax = rate.normalize(self.tax, &self.currency);
        if tax.is_err() {
            errors.push(ValidationError::TaxOutOfRange);
        }
        let tip = rate.normalize(self.tip, &self.currency);
        if tip.is_err() {
            errors.push(ValidationError::TipOutOfRange);
        }

        let mut items = Vec::with_capacity(self.items.len());
        for (index, draft) in self.items.iter().enumerate() {
            match draft.normalize(&self.currency, rate) {
                Ok(item) => items.push(item),
                Err(_) => errors.push(ValidationError::PriceOutOfRange { position: index + 1 }),
            }
        }

        match (tax, tip) {
            (Ok((tax, tax_foreign)), Ok((tip, tip_foreign))) if errors.is_empty() => {
                Ok(ReceiptDraft {
                    payer: ParticipantName::new(payer),
                    items,
                    tax,
                    tip,
                    currency: self.currency.clone(),
                    tax_foreign,
                    tip_foreign,
                })
            }
            _ => Err(ReceiptError::Validation(errors)),
        }
    }

    /// Rebuilds the form from a stored receipt, in the receipt's entry currency
    pub fn from_receipt(receipt: &Receipt) -> Self {
        let foreign = !receipt.currency.is_accounting_unit();
        Self {
            payer: receipt.payer.to_string(),
            currency: receipt.currency.clone(),
            tax: if foreign { receipt.tax_foreign } else { receipt.tax.amount() },
            tip: if foreign { receipt.tip_foreign } else { receipt.tip.amount() },
            items: receipt
                .items
                .iter()
                .map(|item| ItemDraft {
                    name: item.name.clone(),
                    price: if foreign { item.price_foreign } else { item.price_usd.amount() },
                    shared_with: item.shared_with.clone(),
                })
                .collect(),
        }
    }
}
