//! Storage layer for the budget tracker
//!
//! JSON file storage with atomic writes: `users.json` for credentials and
//! `transactions.json` for per-user ledgers, plus the audit log.

pub mod file_io;
pub mod ledgers;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use ledgers::LedgerRepository;
pub use users::UserRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BudgetPaths,
    pub users: UserRepository,
    pub ledgers: LedgerRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a storage instance, creating directories as needed
    ///
    /// Auditing is enabled by default.
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            ledgers: LedgerRepository::new(paths.transactions_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Turn audit logging on or off
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Write an audit entry if auditing is enabled
    ///
    /// A failed write is logged and otherwise ignored; it never changes the
    /// outcome of the operation being audited.
    pub fn log_audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                tracing::warn!(
                    event = %entry.event,
                    username = %entry.username,
                    error = %e,
                    "failed to write audit entry"
                );
            }
        }
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.users.load()?;
        self.ledgers.load()?;
        Ok(())
    }
}
