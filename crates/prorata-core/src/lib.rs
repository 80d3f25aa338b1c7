//! # prorata-core
//! Ledger types, accrual math, and collaborator traits for the Prorata
//! pooled-funds ledger.

pub mod accrual;
pub mod auth;
pub mod constants;
pub mod error;
pub mod events;
pub mod ledger;
pub mod payment;
pub mod traits;
pub mod types;
