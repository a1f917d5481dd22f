//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_balance, format_transaction_list, format_transaction_row};
