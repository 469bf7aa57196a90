//! Proportional tax and tip allocation
//!
//! Tax and tip are charged once per receipt and spread over its items in
//! proportion to item price, so a cheap item carries a small share:
//!
//! ```text
//! ratio              = price / subtotal
//! price_with_tax_tip = price + ratio * tax + ratio * tip
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{Money, MoneyError, ParticipantName};
use domain_receipt::{Item, Receipt};

/// An item with its share of the receipt's tax and tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAllocation {
    pub name: String,
    pub price_usd: Money,
    /// Price plus proportional tax and tip, unrounded
    pub price_with_tax_tip: Money,
    /// Distinct people splitting the item
    pub sharers: Vec<ParticipantName>,
}

impl ItemAllocation {
    /// Each sharer's portion, rounded to cents on its own
    ///
    /// Returns `None` for an item nobody shares.
    pub fn share_per_person(&self) -> Option<Money> {
        self.price_with_tax_tip.split_evenly(self.sharers.len()).ok()
    }
}

/// Allocation of one receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptAllocation {
    /// Position of the receipt in the input
    pub receipt_index: usize,
    pub payer: ParticipantName,
    pub subtotal: Money,
    /// subtotal + tax + tip, credited to the payer
    pub total: Money,
    pub items: Vec<ItemAllocation>,
}

/// Spreads a receipt's tax and tip over its items
///
/// Returns `None` when the subtotal is zero (including a receipt with no
/// items); such a receipt takes no part in settlement. A receipt whose
/// amounts cannot be added up without overflowing is left out the same way.
pub fn allocate(receipt_index: usize, receipt: &Receipt) -> Option<ReceiptAllocation> {
    match try_allocate(receipt_index, receipt) {
        Ok(allocation) => allocation,
        Err(err) => {
            warn!(
                receipt_index,
                payer = %receipt.payer,
                error = %err,
                "Skipping receipt with out-of-range amounts"
            );
            None
        }
    }
}

fn try_allocate(
    receipt_index: usize,
    receipt: &Receipt,
) -> Result<Option<ReceiptAllocation>, MoneyError> {
    let subtotal = receipt.subtotal()?;
    if subtotal.is_zero() {
        debug!(receipt_index, payer = %receipt.payer, "Skipping receipt with zero subtotal");
        return Ok(None);
    }

    let items = receipt
        .items
        .iter()
        .map(|item| allocate_item(item, receipt, subtotal))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(ReceiptAllocation {
        receipt_index,
        payer: receipt.payer.clone(),
        subtotal,
        total: receipt.total()?,
        items,
    }))
}

fn allocate_item(item: &Item, receipt: &Receipt, subtotal: Money) -> Result<ItemAllocation, MoneyError> {
    let ratio = item.price_usd.ratio_of(subtotal)?;
    let price_with_tax_tip = item
        .price_usd
        .checked_add(receipt.tax.checked_multiply(ratio)?)?
        .checked_add(receipt.tip.checked_multiply(ratio)?)?;

    Ok(ItemAllocation {
        name: item.name.clone(),
        price_usd: item.price_usd,
        price_with_tax_tip,
        sharers: item.sharers(),
    })
}
