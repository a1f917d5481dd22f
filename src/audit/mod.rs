//! Audit logging for the budget tracker
//!
//! Records registrations, login attempts and added transactions in an
//! append-only, line-delimited JSON log (`audit.log`).
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::login_failed("mallory"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
