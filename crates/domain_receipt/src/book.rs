//! The receipt book
//!
//! The book is the caller-owned, ordered collection of accepted receipts.
//! Receipts have no identity beyond their current position, so every
//! mutation is positional: append, replace-by-index and remove-by-index.

use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::ConversionRate;
use crate::error::ReceiptError;
use crate::receipt::{Receipt, ReceiptForm};
use crate::validation::ReceiptValidator;

/// What happened to a submitted form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "index", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Appended as a new receipt at this position
    Added(usize),
    /// Replaced the receipt being edited at this position
    Replaced(usize),
}

/// Ordered collection of receipts plus the position currently being edited
///
/// # Invariants
///
/// - Only validated receipts are stored
/// - `editing`, when set, always points at an existing receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptBook {
    receipts: Vec<Receipt>,
    #[serde(default)]
    editing: Option<usize>,
}

impl ReceiptBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Read-only view of every receipt, in order
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn get(&self, index: usize) -> Option<&Receipt> {
        self.receipts.get(index)
    }

    /// Copies the receipts for a computation that must not hold a borrow
    pub fn snapshot(&self) -> Vec<Receipt> {
        self.receipts.clone()
    }

    /// Appends a receipt and returns its position
    pub fn add(&mut self, receipt: Receipt) -> usize {
        self.receipts.push(receipt);
        let index = self.receipts.len() - 1;
        info!(index, "Receipt added");
        index
    }

    /// Replaces the receipt at `index`, returning the old one
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if no receipt exists at `index`
    pub fn replace(&mut self, index: usize, receipt: Receipt) -> Result<Receipt, ReceiptError> {
        let len = self.receipts.len();
        let slot = self
            .receipts
            .get_mut(index)
            .ok_or(ReceiptError::IndexOutOfRange { index, len })?;
        let previous = std::mem::replace(slot, receipt);
        info!(index, "Receipt replaced");
        Ok(previous)
    }

    /// Removes and returns the receipt at `index`
    ///
    /// An edit in progress on the removed receipt is cancelled; an edit on a
    /// later receipt follows it to its new position.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if no receipt exists at `index`
    pub fn remove(&mut self, index: usize) -> Result<Receipt, ReceiptError> {
        let len = self.receipts.len();
        if index >= len {
            return Err(ReceiptError::IndexOutOfRange { index, len });
        }
        let removed = self.receipts.remove(index);

        self.editing = match self.editing {
            Some(editing) if editing == index => None,
            Some(editing) if editing > index => Some(editing - 1),
            other => other,
        };

        info!(index, remaining = self.receipts.len(), "Receipt removed");
        Ok(removed)
    }

    /// Removes every receipt and cancels any edit
    pub fn clear(&mut self) {
        self.receipts.clear();
        self.editing = None;
    }

    /// Marks the receipt at `index` as being edited and returns it
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if no receipt exists at `index`
    pub fn begin_edit(&mut self, index: usize) -> Result<&Receipt, ReceiptError> {
        let len = self.receipts.len();
        let receipt = self
            .receipts
            .get(index)
            .ok_or(ReceiptError::IndexOutOfRange { index, len })?;
        self.editing = Some(index);
        Ok(receipt)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Position of the receipt being edited, if any
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Entry form pre-filled from the receipt being edited
    pub fn edit_form(&self) -> Option<ReceiptForm> {
        self.editing
            .and_then(|index| self.receipts.get(index))
            .map(ReceiptForm::from_receipt)
    }

    /// Validates a form and stores it
    ///
    /// When an edit is in progress the edited receipt is replaced and the
    /// edit ends; otherwise the receipt is appended.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Validation` with every violation; the book is
    /// left untouched in that case.
    pub fn submit(
        &mut self,
        form: &ReceiptForm,
        rate: &ConversionRate,
    ) -> Result<SubmitOutcome, ReceiptError> {
        let receipt = ReceiptValidator::accept(form, rate)?;

        match self.editing.take() {
            Some(index) => {
                self.replace(index, receipt)?;
                Ok(SubmitOutcome::Replaced(index))
            }
            None => Ok(SubmitOutcome::Added(self.add(receipt))),
        }
    }
}
