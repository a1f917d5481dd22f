//! Transaction and ledger models
//!
//! A ledger is a user's append-only list of signed transactions together with
//! the running balance they sum to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// A single income (positive) or expense (negative) entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-form description, e.g. "Salary" or "Groceries"
    #[serde(default)]
    pub description: String,

    /// Signed amount: positive for income, negative for expense
    pub amount: Money,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with the current time
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at: Utc::now(),
        }
    }
}

/// One user's transactions and running balance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub balance: Money,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and fold its amount into the balance
    ///
    /// The ledger is left untouched if the new balance would overflow.
    pub fn record(&mut self, transaction: Transaction) -> BudgetResult<Money> {
        let balance = self
            .balance
            .checked_add(transaction.amount)
            .ok_or_else(|| BudgetError::Validation("Balance would overflow".into()))?;

        self.transactions.push(transaction);
        self.balance = balance;
        Ok(balance)
    }

    /// Sum of all recorded amounts, independent of the stored balance
    ///
    /// Returns `None` if the total does not fit in a `Money`.
    pub fn computed_balance(&self) -> Option<Money> {
        self.transactions
            .iter()
            .try_fold(Money::zero(), |acc, t| acc.checked_add(t.amount))
    }

    /// Whether the stored balance agrees with the transaction list
    pub fn is_consistent(&self) -> bool {
        self.computed_balance() == Some(self.balance)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
