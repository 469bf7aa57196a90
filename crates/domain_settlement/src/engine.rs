//! Settlement engine
//!
//! Stateless entry point that runs allocation, the balance ledger and the
//! greedy settlement over a snapshot of receipts.

use tracing::debug;

use domain_receipt::Receipt;

use crate::allocation::{allocate, ReceiptAllocation};
use crate::ledger::BalanceLedger;
use crate::report::SettlementReport;
use crate::transfer::settle;

/// Computes balances and settling payments for a list of receipts
///
/// The engine never fails: receipts with a zero subtotal are left out, as
/// are receipts whose amounts overflow, and calling it twice on the same
/// receipts gives the same report.
///
/// # Example
///
/// ```rust,ignore
/// let report = SettlementEngine::compute(book.receipts());
/// for line in report.transaction_lines() {
///     println!("{}", line);
/// }
/// ```
pub struct SettlementEngine;

impl SettlementEngine {
    /// Runs the full settlement over `receipts`
    pub fn compute(receipts: &[Receipt]) -> SettlementReport {
        let allocations: Vec<ReceiptAllocation> = receipts
            .iter()
            .enumerate()
            .filter_map(|(index, receipt)| allocate(index, receipt))
            .collect();

        let (ledger, allocations) = BalanceLedger::post_all(allocations);
        let transactions = settle(&ledger);

        debug!(
            receipts = receipts.len(),
            contributing = allocations.len(),
            people = ledger.net_balance().len(),
            transactions = transactions.len(),
            "Settlement computed"
        );

        SettlementReport::new(ledger, transactions, allocations)
    }
}
