//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for settlement results that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_settlement::{BalanceMap, SettlementReport};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Per-person rounding tolerance for balance sums
pub const CENT: Decimal = dec!(0.01);

/// Largest error a single rounding to cents can introduce
pub const HALF_CENT: Decimal = dec!(0.005);

/// Rounding slack allowed when checking that a report balances
///
/// Every per-person split and every net balance is rounded on its own, so
/// the slack grows with the number of splits. It is never tighter than one
/// cent per person.
pub fn rounding_tolerance(report: &SettlementReport) -> Decimal {
    let splits: usize = report
        .allocations
        .iter()
        .flat_map(|allocation| allocation.items.iter())
        .map(|item| item.sharers.len())
        .sum();
    let people = report.net_balance.len();
    let per_person = CENT * Decimal::from(people);
    let per_split = HALF_CENT * Decimal::from(splits + people);
    per_person.max(per_split)
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a balance map holds exactly the given amounts
///
/// Order of `expected` does not matter.
pub fn assert_balances(map: &BalanceMap, expected: &[(&str, Decimal)]) {
    assert_eq!(
        map.len(),
        expected.len(),
        "Expected {} entries, got {:?}",
        expected.len(),
        map
    );
    for (person, amount) in expected {
        let actual = map
            .get(*person)
            .unwrap_or_else(|| panic!("No entry for {} in {:?}", person, map));
        assert_eq!(
            actual.amount(),
            *amount,
            "Balance for {}: actual={}, expected={}",
            person,
            actual.amount(),
            amount
        );
    }
}

/// Asserts that net balances sum to zero within the rounding tolerance
pub fn assert_net_balances_sum_to_zero(report: &SettlementReport) {
    let total: Money = report.net_balance.values().sum();
    let tolerance = rounding_tolerance(report);
    assert!(
        total.amount().abs() <= tolerance,
        "Net balances sum to {} (tolerance {}): {:?}",
        total.amount(),
        tolerance,
        report.net_balance
    );
}

/// Asserts that applying every transfer drives each balance to zero
///
/// Whatever rounding residue the balances carry may be left over.
pub fn assert_transfers_settle(report: &SettlementReport) {
    let mut remaining = report.net_balance.clone();
    for transfer in &report.transactions {
        assert!(
            transfer.amount.is_positive(),
            "Transfer {} is not positive",
            transfer
        );
        if let Some(balance) = remaining.get_mut(&transfer.from) {
            *balance += transfer.amount;
        }
        if let Some(balance) = remaining.get_mut(&transfer.to) {
            *balance -= transfer.amount;
        }
    }

    let tolerance = rounding_tolerance(report);
    for (person, balance) in &remaining {
        assert!(
            balance.amount().abs() <= tolerance,
            "{} is left with {} after settlement (tolerance {})",
            person,
            balance.amount(),
            tolerance
        );
    }
}

/// Asserts that a transfer list respects the greedy upper bound
pub fn assert_transfer_count_bounded(report: &SettlementReport) {
    let creditors = report.net_balance.values().filter(|b| b.is_positive()).count();
    let debtors = report.net_balance.values().filter(|b| b.is_negative()).count();
    let bound = (creditors + debtors).saturating_sub(1);
    assert!(
        report.transactions.len() <= bound,
        "{} transfers exceed bound {} ({} creditors, {} debtors)",
        report.transactions.len(),
        bound,
        creditors,
        debtors
    );
}
