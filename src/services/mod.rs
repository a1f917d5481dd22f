//! Service layer for the budget tracker
//!
//! Business logic on top of the storage layer: validation, credential
//! checks, balance updates and audit logging.

pub mod auth;
pub mod ledger;

pub use auth::AuthService;
pub use ledger::LedgerService;
