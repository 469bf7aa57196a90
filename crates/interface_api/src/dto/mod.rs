//! Data transfer objects

pub mod currency;
pub mod participant;
pub mod receipt;
pub mod settlement;
