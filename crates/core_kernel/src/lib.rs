//! Core Kernel - Foundational types for receipt settlement
//!
//! This crate provides the building blocks shared by the receipt and
//! settlement domains:
//! - Money in the single accounting unit with cent rounding
//! - Currency codes and conversion rates for normalizing foreign receipts
//! - Participant names

pub mod money;
pub mod currency;
pub mod participant;
pub mod error;

pub use money::{Money, MoneyError, round_to_cents, CENT_PLACES};
pub use currency::{CurrencyCode, ConversionRate, ACCOUNTING_CURRENCY};
pub use participant::{ParticipantName, dedup_preserving_order};
pub use error::CoreError;
