//! Receipt validation rules
//!
//! A draft is accepted only when every rule holds. All rules are checked
//! and every violation is reported, so the person entering the receipt can
//! fix everything in one pass.
//!
//! # Rules
//!
//! - The payer is non-empty after trimming
//! - Tax and tip are not negative
//! - Every item has a non-empty name (after trimming)
//! - Every item costs more than zero
//! - Every item is shared with at least one person
//! - Subtotal + tax + tip fits in a `Decimal`, in both currencies
//!
//! Amounts that cannot be converted at the current rate are reported by
//! [`ReceiptForm::normalize`] before these rules run.
//!
//! Names are not checked against the participant roster.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use core_kernel::ConversionRate;
use crate::error::ReceiptError;
use crate::receipt::{total_of, Receipt, ReceiptDraft, ReceiptForm};

/// A single user-correctable problem with a draft
///
/// Item positions are 1-based, matching how items are numbered on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Payer name is required.")]
    MissingPayer,

    #[error("Tax cannot be negative.")]
    NegativeTax,

    #[error("Tip cannot be negative.")]
    NegativeTip,

    #[error("Item #{position} name is required.")]
    MissingItemName { position: usize },

    #[error("Item #{position} amount must be greater than 0.")]
    NonPositivePrice { position: usize },

    #[error("Item #{position} 'Shared with' must include at least one person.")]
    EmptySharedWith { position: usize },

    #[error("Tax is too large to convert.")]
    TaxOutOfRange,

    #[error("Tip is too large to convert.")]
    TipOutOfRange,

    #[error("Item #{position} amount is too large to convert.")]
    PriceOutOfRange { position: usize },

    #[error("Receipt total is too large.")]
    TotalOutOfRange,
}

/// Validator for receipt drafts
pub struct ReceiptValidator;

impl ReceiptValidator {
    /// Checks a draft and returns every violation found
    ///
    /// An empty list means the draft is acceptable. The draft is not modified.
    pub fn validate(draft: &ReceiptDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if draft.payer.is_blank() {
            errors.push(ValidationError::MissingPayer);
        }
        if draft.tax.is_negative() {
            errors.push(ValidationError::NegativeTax);
        }
        if draft.tip.is_negative() {
            errors.push(ValidationError::NegativeTip);
        }

        for (index, item) in draft.items.iter().enumerate() {
            let position = index + 1;

            if item.name.trim().is_empty() {
                errors.push(ValidationError::MissingItemName { position });
            }
            if !item.price_usd.is_positive() {
                errors.push(ValidationError::NonPositivePrice { position });
            }
            if item.shared_with.is_empty() {
                errors.push(ValidationError::EmptySharedWith { position });
            }
        }

        if !total_is_representable(draft) {
            errors.push(ValidationError::TotalOutOfRange);
        }

        errors
    }

    /// Validates a draft and turns it into a receipt
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Validation` with every violation when the draft
    /// is rejected; nothing is partially accepted.
    pub fn check(draft: ReceiptDraft) -> Result<Receipt, ReceiptError> {
        let errors = Self::validate(&draft);
        if !errors.is_empty() {
            warn!(
                payer = %draft.payer,
                error_count = errors.len(),
                "Receipt draft rejected"
            );
            return Err(ReceiptError::Validation(errors));
        }

        debug!(payer = %draft.payer, items = draft.items.len(), "Receipt draft accepted");
        Ok(draft.into_receipt())
    }

    /// Normalizes an entry form with `rate`, then validates it
    pub fn accept(form: &ReceiptForm, rate: &ConversionRate) -> Result<Receipt, ReceiptError> {
        let draft = form.normalize(rate).map_err(|err| {
            warn!(payer = %form.payer, currency = %form.currency, "Receipt amounts out of range");
            err
        })?;
        Self::check(draft)
    }
}

fn total_is_representable(draft: &ReceiptDraft) -> bool {
    let foreign = draft
        .items
        .iter()
        .map(|item| item.price_foreign)
        .chain([draft.tax_foreign, draft.tip_foreign])
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount));

    total_of(&draft.items, draft.tax, draft.tip).is_ok() && foreign.is_some()
}
