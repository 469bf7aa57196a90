//! Receipt DTOs
//!
//! Receipts are submitted as a [`ReceiptForm`](domain_receipt::ReceiptForm)
//! in the currency they were entered in.

use serde::Serialize;

use domain_receipt::{ReceiptSummary, SubmitOutcome};

#[derive(Debug, Serialize)]
pub struct ReceiptListResponse {
    pub count: usize,
    pub receipts: Vec<ReceiptSummary>,
}

#[derive(Debug, Serialize)]
pub struct SubmitReceiptResponse {
    /// "added" or "replaced"
    pub outcome: String,
    /// Position of the stored receipt
    pub index: usize,
    pub receipt: ReceiptSummary,
}

impl SubmitReceiptResponse {
    pub fn new(outcome: SubmitOutcome, receipt: ReceiptSummary) -> Self {
        let (outcome, index) = match outcome {
            SubmitOutcome::Added(index) => ("added", index),
            SubmitOutcome::Replaced(index) => ("replaced", index),
        };
        Self {
            outcome: outcome.to_string(),
            index,
            receipt,
        }
    }
}
