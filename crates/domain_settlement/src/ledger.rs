//! Per-participant balance ledger
//!
//! The ledger is rebuilt from the full receipt list on every query. It has
//! no identity and no incremental state.
//!
//! # Accounting
//!
//! - `total_paid[p]`: sum of receipt totals where `p` paid
//! - `total_owed[p]`: sum of `p`'s rounded shares of the items `p` splits
//! - `net_balance[p] = total_paid[p] - total_owed[p]`
//!
//! A receipt is posted whole or not at all: if any of its amounts would
//! push a balance out of the `Decimal` range, the ledger keeps its state
//! from before that receipt and the receipt is left out.
//!
//! Every person is registered with a zero entry before any amount is
//! accumulated for them, and lookups of unknown people return zero.
//! Entries keep the order in which people were first seen while scanning
//! receipts (each item's sharers, then the payer).

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{Money, MoneyError, ParticipantName};
use domain_receipt::Receipt;

use crate::allocation::{allocate, ReceiptAllocation};

/// Mapping from participant to amount, in first-seen order
pub type BalanceMap = IndexMap<ParticipantName, Money>;

/// Paid, owed and net amounts per participant, rounded to cents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceLedger {
    total_paid: BalanceMap,
    total_owed: BalanceMap,
    net_balance: BalanceMap,
}

impl BalanceLedger {
    /// Builds the ledger from a list of receipts
    ///
    /// Receipts with a zero subtotal are skipped.
    pub fn from_receipts(receipts: &[Receipt]) -> Self {
        let allocations: Vec<ReceiptAllocation> = receipts
            .iter()
            .enumerate()
            .filter_map(|(index, receipt)| allocate(index, receipt))
            .collect();
        Self::from_allocations(&allocations)
    }

    /// Builds the ledger from already allocated receipts
    pub fn from_allocations(allocations: &[ReceiptAllocation]) -> Self {
        let mut ledger = Self::default();
        for allocation in allocations {
            ledger.post(allocation);
        }
        ledger.round_to_cents();
        ledger
    }

    /// Builds the ledger and returns it with the allocations it could post
    pub(crate) fn post_all(allocations: Vec<ReceiptAllocation>) -> (Self, Vec<ReceiptAllocation>) {
        let mut ledger = Self::default();
        let posted = allocations
            .into_iter()
            .filter(|allocation| ledger.post(allocation))
            .collect();
        ledger.round_to_cents();
        (ledger, posted)
    }

    /// Posts one receipt; returns false and leaves the ledger untouched on overflow
    fn post(&mut self, allocation: &ReceiptAllocation) -> bool {
        let mut next = self.clone();
        match next.apply(allocation) {
            Ok(()) => {
                *self = next;
                debug!(
                    receipt_index = allocation.receipt_index,
                    payer = %allocation.payer,
                    total = %allocation.total,
                    "Receipt posted to ledger"
                );
                true
            }
            Err(err) => {
                warn!(
                    receipt_index = allocation.receipt_index,
                    payer = %allocation.payer,
                    error = %err,
                    "Receipt left out of ledger"
                );
                false
            }
        }
    }

    fn apply(&mut self, allocation: &ReceiptAllocation) -> Result<(), MoneyError> {
        for item in &allocation.items {
            let Some(share) = item.share_per_person() else {
                continue;
            };
            for person in &item.sharers {
                self.charge(person, share)?;
            }
        }
        self.credit(&allocation.payer, allocation.total)
    }

    /// Adds `share` to what `person` owes
    fn charge(&mut self, person: &ParticipantName, share: Money) -> Result<(), MoneyError> {
        Self::register(&mut self.net_balance, person);
        Self::register(&mut self.total_owed, person);
        if let Some(owed) = self.total_owed.get_mut(person) {
            *owed = owed.checked_add(share)?;
        }
        if let Some(net) = self.net_balance.get_mut(person) {
            *net = net.checked_sub(share)?;
        }
        Ok(())
    }

    /// Adds `amount` to what `person` paid
    fn credit(&mut self, person: &ParticipantName, amount: Money) -> Result<(), MoneyError> {
        Self::register(&mut self.net_balance, person);
        Self::register(&mut self.total_paid, person);
        if let Some(paid) = self.total_paid.get_mut(person) {
            *paid = paid.checked_add(amount)?;
        }
        if let Some(net) = self.net_balance.get_mut(person) {
            *net = net.checked_add(amount)?;
        }
        Ok(())
    }

    fn register(map: &mut BalanceMap, person: &ParticipantName) {
        if !map.contains_key(person) {
            map.insert(person.clone(), Money::zero());
        }
    }

    fn round_to_cents(&mut self) {
        for map in [&mut self.total_paid, &mut self.total_owed, &mut self.net_balance] {
            for amount in map.values_mut() {
                *amount = amount.round_to_cents();
            }
        }
    }

    pub fn total_paid(&self) -> &BalanceMap {
        &self.total_paid
    }

    pub fn total_owed(&self) -> &BalanceMap {
        &self.total_owed
    }

    pub fn net_balance(&self) -> &BalanceMap {
        &self.net_balance
    }

    /// Amount `person` paid; zero if they never paid
    pub fn paid(&self, person: &str) -> Money {
        self.total_paid.get(person).copied().unwrap_or_default()
    }

    /// Amount `person` owes; zero if they share nothing
    pub fn owed(&self, person: &str) -> Money {
        self.total_owed.get(person).copied().unwrap_or_default()
    }

    /// Net balance of `person`; positive means they are owed money
    pub fn net(&self, person: &str) -> Money {
        self.net_balance.get(person).copied().unwrap_or_default()
    }

    /// Everyone who paid or owes, in first-seen order
    pub fn people(&self) -> impl Iterator<Item = &ParticipantName> {
        self.net_balance.keys()
    }

    /// Sum of all net balances; zero up to per-split rounding residue
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` when the balances cannot be added up
    pub fn residue(&self) -> Result<Money, MoneyError> {
        Money::checked_sum(self.net_balance.values().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.net_balance.is_empty()
    }
}
