//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Money, Transaction};

/// Kinds of auditable events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A new user was registered
    UserRegistered,
    /// A login attempt succeeded
    LoginSucceeded,
    /// A login attempt failed (unknown user or wrong password)
    LoginFailed,
    /// A transaction was appended to a ledger
    TransactionAdded,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::UserRegistered => write!(f, "REGISTER"),
            AuditEvent::LoginSucceeded => write!(f, "LOGIN"),
            AuditEvent::LoginFailed => write!(f, "LOGIN_FAILED"),
            AuditEvent::TransactionAdded => write!(f, "TRANSACTION"),
        }
    }
}

/// A single audit log entry
///
/// Never carries passwords or password hashes; `details` holds only
/// non-secret context such as a recorded transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: AuditEvent,

    /// The username involved (the attempted name for failed logins)
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(event: AuditEvent, username: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            username: username.into(),
            details: None,
        }
    }

    pub fn user_registered(username: impl Into<String>) -> Self {
        Self::new(AuditEvent::UserRegistered, username)
    }

    pub fn login_succeeded(username: impl Into<String>) -> Self {
        Self::new(AuditEvent::LoginSucceeded, username)
    }

    pub fn login_failed(username: impl Into<String>) -> Self {
        Self::new(AuditEvent::LoginFailed, username)
    }

    /// Record an appended transaction with the resulting balance
    pub fn transaction_added(
        username: impl Into<String>,
        transaction: &Transaction,
        balance: Money,
    ) -> Self {
        let mut entry = Self::new(AuditEvent::TransactionAdded, username);
        entry.details = Some(serde_json::json!({
            "description": transaction.description,
            "amount": transaction.amount,
            "balance": balance,
        }));
        entry
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} {:<12} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.event.to_string(),
            self.username
        );

        if let Some(details) = &self.details {
            if let Some(amount) = details.get("amount").and_then(|a| a.as_i64()) {
                line.push_str(&format!(" {}", Money::from_cents(amount)));
            }
            if let Some(desc) = details.get("description").and_then(|d| d.as_str()) {
                if !desc.is_empty() {
                    line.push_str(&format!(" ({})", desc));
                }
            }
        }

        line
    }
}
