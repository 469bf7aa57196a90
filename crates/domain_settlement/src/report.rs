//! Settlement results

use serde::Serialize;

use core_kernel::{Money, ParticipantName};

use crate::allocation::ReceiptAllocation;
use crate::ledger::{BalanceLedger, BalanceMap};
use crate::transfer::Transfer;

/// Message shown when nobody needs to pay anyone
pub const SETTLED_MESSAGE: &str = "Everyone is settled. No payments needed.";

/// One row of the per-person summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub name: ParticipantName,
    pub paid: Money,
    pub owes: Money,
    pub net_balance: Money,
}

/// Everything computed from one snapshot of receipts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    pub transactions: Vec<Transfer>,
    pub total_paid: BalanceMap,
    pub total_owed: BalanceMap,
    pub net_balance: BalanceMap,
    /// Per-item tax/tip allocation of every contributing receipt
    pub allocations: Vec<ReceiptAllocation>,
}

impl SettlementReport {
    pub(crate) fn new(
        ledger: BalanceLedger,
        transactions: Vec<Transfer>,
        allocations: Vec<ReceiptAllocation>,
    ) -> Self {
        Self {
            transactions,
            total_paid: ledger.total_paid().clone(),
            total_owed: ledger.total_owed().clone(),
            net_balance: ledger.net_balance().clone(),
            allocations,
        }
    }

    /// Human-readable payments, e.g. "B pays A $10.00"
    pub fn transaction_lines(&self) -> Vec<String> {
        self.transactions.iter().map(|t| t.to_string()).collect()
    }

    /// Returns true when no payments are needed
    pub fn is_settled(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transaction lines, or the settled message when there are none
    pub fn status_lines(&self) -> Vec<String> {
        if self.is_settled() {
            vec![SETTLED_MESSAGE.to_string()]
        } else {
            self.transaction_lines()
        }
    }

    /// Per-person rows sorted by name; missing amounts read as zero
    pub fn summary(&self) -> Vec<PersonSummary> {
        let mut people: Vec<&ParticipantName> = self
            .total_paid
            .keys()
            .chain(self.total_owed.keys())
            .collect();
        people.sort();
        people.dedup();

        people
            .into_iter()
            .map(|name| PersonSummary {
                name: name.clone(),
                paid: self.total_paid.get(name).copied().unwrap_or_default(),
                owes: self.total_owed.get(name).copied().unwrap_or_default(),
                net_balance: self.net_balance.get(name).copied().unwrap_or_default(),
            })
            .collect()
    }
}
