//! Per-receipt display totals
//!
//! A summary shows one receipt in both the accounting unit and the foreign
//! currency. For receipts entered in USD the foreign column is derived from
//! the current rate; for foreign receipts the entered figures are shown.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{
    round_to_cents, ConversionRate, CoreError, CurrencyCode, Money, MoneyError, ParticipantName,
};
use crate::receipt::Receipt;

/// One item row of a receipt summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub price_usd: Money,
    pub price_foreign: Decimal,
    pub shared_with: Vec<ParticipantName>,
}

/// A receipt laid out for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptSummary {
    /// 1-based receipt number
    pub number: usize,
    pub payer: ParticipantName,
    pub currency: CurrencyCode,
    pub items: Vec<ItemRow>,
    pub tax_usd: Money,
    pub tax_foreign: Decimal,
    pub tip_usd: Money,
    pub tip_foreign: Decimal,
    pub total_usd: Money,
    pub total_foreign: Decimal,
}

impl ReceiptSummary {
    /// Builds the summary of the receipt stored at `index`
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Money` when a total, or a foreign figure derived
    /// with `rate`, cannot be represented
    pub fn from_receipt(
        index: usize,
        receipt: &Receipt,
        rate: &ConversionRate,
    ) -> Result<Self, CoreError> {
        let entered_in_usd = receipt.currency.is_accounting_unit();
        let foreign = |usd: Money, entered: Decimal| -> Result<Decimal, CoreError> {
            if entered_in_usd {
                Ok(round_to_cents(rate.from_usd(usd)?))
            } else {
                Ok(entered)
            }
        };

        let items = receipt
            .items
            .iter()
            .map(|item| -> Result<ItemRow, CoreError> {
                Ok(ItemRow {
                    name: item.name.clone(),
                    price_usd: item.price_usd,
                    price_foreign: foreign(item.price_usd, item.price_foreign)?,
                    shared_with: item.shared_with.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tax_foreign = foreign(receipt.tax, receipt.tax_foreign)?;
        let tip_foreign = foreign(receipt.tip, receipt.tip_foreign)?;
        let total_foreign = items
            .iter()
            .map(|row| row.price_foreign)
            .chain([tax_foreign, tip_foreign])
            .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
            .ok_or(MoneyError::Overflow)?;

        Ok(Self {
            number: index + 1,
            payer: receipt.payer.clone(),
            currency: receipt.currency.clone(),
            items,
            tax_usd: receipt.tax,
            tax_foreign,
            tip_usd: receipt.tip,
            tip_foreign,
            total_usd: receipt.total()?,
            total_foreign,
        })
    }

    /// Summaries for a whole book, numbered from 1
    pub fn for_all(receipts: &[Receipt], rate: &ConversionRate) -> Result<Vec<Self>, CoreError> {
        receipts
            .iter()
            .enumerate()
            .map(|(index, receipt)| Self::from_receipt(index, receipt, rate))
            .collect()
    }
}
