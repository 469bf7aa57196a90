//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! receipt settlement test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built receipts for the common settlement scenarios
//! - `builders`: Builder patterns for receipts, items and entry forms
//! - `assertions`: Custom assertion helpers for balances and transfers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
