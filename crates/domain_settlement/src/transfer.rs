//! Greedy debt settlement
//!
//! Net balances are turned into debtor-to-creditor payments with a two
//! pointer walk:
//!
//! 1. Creditors (net > 0) and debtors (net < 0) are listed in ledger order
//! 2. The current debtor pays the current creditor `min(debt, credit)`
//! 3. Whoever reaches exactly zero is passed over
//! 4. The walk stops when either list runs out
//!
//! The result is not guaranteed to have the fewest possible payments, but
//! never more than `debtors + creditors - 1`.

use serde::Serialize;
use std::fmt;

use core_kernel::{Money, ParticipantName};

use crate::ledger::BalanceLedger;

/// A single payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub amount: Money,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, self.amount)
    }
}

/// A participant's outstanding position during settlement
#[derive(Debug, Clone)]
struct Position {
    person: ParticipantName,
    remaining: Money,
}

/// Computes the payments that settle every net balance in the ledger
pub fn settle(ledger: &BalanceLedger) -> Vec<Transfer> {
    let creditors: Vec<Position> = ledger
        .net_balance()
        .iter()
        .filter(|(_, net)| net.is_positive())
        .map(|(person, net)| Position { person: person.clone(), remaining: *net })
        .collect();
    let debtors: Vec<Position> = ledger
        .net_balance()
        .iter()
        .filter(|(_, net)| net.is_negative())
        .map(|(person, net)| Position { person: person.clone(), remaining: -*net })
        .collect();

    match_greedily(debtors, creditors)
}

fn match_greedily(mut debtors: Vec<Position>, mut creditors: Vec<Position>) -> Vec<Transfer> {
    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let payment = debtors[i].remaining.min(creditors[j].remaining);
        transfers.push(Transfer {
            from: debtors[i].person.clone(),
            to: creditors[j].person.clone(),
            amount: payment,
        });

        debtors[i].remaining -= payment;
        creditors[j].remaining -= payment;

        if debtors[i].remaining.is_zero() {
            i += 1;
        }
        if creditors[j].remaining.is_zero() {
            j += 1;
        }
    }

    transfers
}
