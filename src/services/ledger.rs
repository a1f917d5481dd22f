//! Ledger service
//!
//! Appending transactions to a user's ledger and reading back the balance
//! and history.

use crate::audit::AuditEntry;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, Money, Transaction};
use crate::storage::Storage;

/// Service for a user's transactions and balance
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a signed transaction and persist the ledger
    ///
    /// Returns the recorded transaction and the new balance.
    pub fn add_transaction(
        &self,
        username: &str,
        description: &str,
        amount: Money,
    ) -> BudgetResult<(Transaction, Money)> {
        let transaction = Transaction::new(description.trim(), amount);

        let balance = self.storage.ledgers.record(username, transaction.clone())?;
        self.storage.ledgers.save()?;

        self.storage.log_audit(&AuditEntry::transaction_added(
            username,
            &transaction,
            balance,
        ));
        tracing::debug!(%username, amount = amount.cents(), "transaction recorded");

        Ok((transaction, balance))
    }

    /// The user's current balance
    pub fn balance(&self, username: &str) -> BudgetResult<Money> {
        Ok(self.ledger(username)?.balance)
    }

    /// The user's transactions in the order they were added
    pub fn transactions(&self, username: &str) -> BudgetResult<Vec<Transaction>> {
        Ok(self.ledger(username)?.transactions)
    }

    /// The user's full ledger
    pub fn ledger(&self, username: &str) -> BudgetResult<Ledger> {
        self.storage
            .ledgers
            .get(username)?
            .ok_or_else(|| BudgetError::NotFound {
                entity_type: "Ledger",
                identifier: username.to_string(),
            })
    }
}
