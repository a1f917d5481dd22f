//! CLI command handlers
//!
//! The interactive session and the informational subcommands, bridging clap
//! argument parsing with the service layer.

pub mod info;
pub mod session;

pub use info::{show_audit, show_config};
pub use session::{MenuChoice, Session};
