//! Request handlers

pub mod currency;
pub mod health;
pub mod participants;
pub mod receipts;
pub mod settlement;
