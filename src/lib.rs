//! Budget Tracker - single-user command-line budget tracking
//!
//! A user registers or logs in against a local credential file, then appends
//! signed transactions to a running balance stored as JSON.
//!
//! # Architecture
//!
//! - `crypto`: salted PBKDF2 password hashing and verification
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: users, transactions, ledgers and money
//! - `storage`: JSON file repositories with atomic writes
//! - `services`: registration/login and ledger logic
//! - `audit`: append-only audit log
//! - `display`: terminal formatting
//! - `cli`: interactive session and subcommands
//! - `logging`: diagnostic tracing setup
//!
//! # Example
//!
//! ```
//! use budget_tracker::crypto::{hash_password, verify_password};
//!
//! let stored = hash_password("correct horse battery staple")?;
//! assert!(verify_password("correct horse battery staple", &stored)?);
//! assert!(!verify_password("Correct Horse Battery Staple", &stored)?);
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
