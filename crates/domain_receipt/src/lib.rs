//! Receipt Domain
//!
//! This crate models shared-expense receipts up to the point where they are
//! handed to the settlement engine.
//!
//! # Receipt Lifecycle
//!
//! ```text
//! ReceiptForm -> normalize(rate) -> ReceiptDraft -> ReceiptValidator -> Receipt -> ReceiptBook
//! ```
//!
//! A rejected draft reports every problem at once and is never partially
//! stored. The book is owned by the caller; nothing here keeps global state.

pub mod item;
pub mod receipt;
pub mod validation;
pub mod roster;
pub mod book;
pub mod summary;
pub mod error;

pub use item::{Item, ItemDraft};
pub use receipt::{Receipt, ReceiptDraft, ReceiptForm, PAYER_PLACEHOLDER};
pub use validation::{ReceiptValidator, ValidationError};
pub use roster::Roster;
pub use book::{ReceiptBook, SubmitOutcome};
pub use summary::{ItemRow, ReceiptSummary};
pub use error::ReceiptError;
