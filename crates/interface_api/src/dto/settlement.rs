//! Settlement DTOs

use serde::Serialize;

use domain_settlement::{BalanceMap, PersonSummary, ReceiptAllocation, SettlementReport, Transfer};

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    /// True when nobody needs to pay anyone
    pub settled: bool,
    /// Payment lines, or the settled message
    pub lines: Vec<String>,
    pub transactions: Vec<Transfer>,
    pub total_paid: BalanceMap,
    pub total_owed: BalanceMap,
    pub net_balance: BalanceMap,
    /// Per-person rows sorted by name
    pub summary: Vec<PersonSummary>,
    pub allocations: Vec<ReceiptAllocation>,
}

impl From<SettlementReport> for SettlementResponse {
    fn from(report: SettlementReport) -> Self {
        let settled = report.is_settled();
        let lines = report.status_lines();
        let summary = report.summary();
        Self {
            settled,
            lines,
            summary,
            transactions: report.transactions,
            total_paid: report.total_paid,
            total_owed: report.total_owed,
            net_balance: report.net_balance,
            allocations: report.allocations,
        }
    }
}
