//! Settlement Domain
//!
//! This crate turns a list of receipts into per-person balances and a short
//! list of payments that settles them.
//!
//! # Pipeline
//!
//! ```text
//! receipts -> allocate (tax/tip by price) -> BalanceLedger -> settle (greedy) -> SettlementReport
//! ```
//!
//! # Rounding
//!
//! Every split is rounded to cents on its own with banker's rounding, and
//! the resulting residue (at most half a cent per split) is not
//! redistributed. Net balances therefore sum to zero only within
//! `0.01 * people`.

pub mod allocation;
pub mod ledger;
pub mod transfer;
pub mod report;
pub mod engine;

pub use allocation::{allocate, ItemAllocation, ReceiptAllocation};
pub use ledger::{BalanceLedger, BalanceMap};
pub use transfer::{settle, Transfer};
pub use report::{PersonSummary, SettlementReport, SETTLED_MESSAGE};
pub use engine::SettlementEngine;
