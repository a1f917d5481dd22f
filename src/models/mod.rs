//! Core data models for the budget tracker
//!
//! Users with their stored credentials, and per-user ledgers of signed
//! transactions.

pub mod money;
pub mod transaction;
pub mod user;

pub use money::{Money, MoneyParseError};
pub use transaction::{Ledger, Transaction};
pub use user::User;
