//! Ledger repository for JSON storage
//!
//! Manages `transactions.json`: an object mapping each username to that
//! user's ledger.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Ledger, Money, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Repository for per-user ledgers
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Ledger>>,
}

impl LedgerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load ledgers from disk, replacing anything in memory
    pub fn load(&self) -> BudgetResult<()> {
        let ledgers: BTreeMap<String, Ledger> = read_json(&self.path)?;

        for (username, ledger) in &ledgers {
            let computed = ledger.computed_balance().ok_or_else(|| {
                BudgetError::DataCorruption(format!(
                    "Ledger for '{}' has a transaction total out of range",
                    username
                ))
            })?;

            if computed != ledger.balance {
                tracing::warn!(
                    %username,
                    stored = ledger.balance.cents(),
                    computed = computed.cents(),
                    "stored balance does not match transaction total"
                );
            }
        }

        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = ledgers;

        Ok(())
    }

    /// Save ledgers to disk
    pub fn save(&self) -> BudgetResult<()> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get a copy of a user's ledger
    pub fn get(&self, username: &str) -> BudgetResult<Option<Ledger>> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(username).cloned())
    }

    pub fn contains(&self, username: &str) -> BudgetResult<bool> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.contains_key(username))
    }

    /// Create an empty ledger for `username` if none exists
    ///
    /// Returns true if a ledger was created.
    pub fn ensure(&self, username: &str) -> BudgetResult<bool> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.contains_key(username) {
            return Ok(false);
        }

        data.insert(username.to_string(), Ledger::new());
        Ok(true)
    }

    /// Append a transaction to a user's ledger, returning the new balance
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user has no ledger.
    pub fn record(&self, username: &str, transaction: Transaction) -> BudgetResult<Money> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let ledger = data.get_mut(username).ok_or_else(|| BudgetError::NotFound {
            entity_type: "Ledger",
            identifier: username.to_string(),
        })?;

        ledger.record(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("transactions.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo();

        assert!(repo.ensure("alice").unwrap());
        repo.record("alice", Transaction::new("Pay", Money::from_cents(100)))
            .unwrap();
        assert!(!repo.ensure("alice").unwrap());

        assert_eq!(repo.get("alice").unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_record_without_ledger_is_not_found() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo
            .record("ghost", Transaction::new("x", Money::from_cents(1)))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.ensure("alice").unwrap();
        repo.ensure("bob").unwrap();
        repo.record("alice", Transaction::new("Salary", Money::from_cents(300_000)))
            .unwrap();
        let balance = repo
            .record("alice", Transaction::new("Rent", Money::from_cents(-95_000)))
            .unwrap();
        repo.save().unwrap();

        let reloaded = LedgerRepository::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();

        let alice = reloaded.get("alice").unwrap().unwrap();
        assert_eq!(alice.balance, balance);
        assert_eq!(alice.transactions[1].description, "Rent");
        assert!(reloaded.get("bob").unwrap().unwrap().is_empty());
        assert!(!reloaded.contains("carol").unwrap());
    }

    #[test]
    fn test_ledgers_are_isolated() {
        let (_temp_dir, repo) = create_test_repo();
        repo.ensure("alice").unwrap();
        repo.ensure("bob").unwrap();
        repo.record("alice", Transaction::new("Gift", Money::from_cents(500)))
            .unwrap();

        assert!(repo.get("bob").unwrap().unwrap().balance.is_zero());
    }

    #[test]
    fn test_load_rejects_out_of_range_total() {
        let (temp_dir, repo) = create_test_repo();
        let json = format!(
            r#"{{"alice":{{"transactions":[
                {{"description":"Jackpot","amount":{},"created_at":"2024-01-01T00:00:00Z"}},
                {{"description":"One more","amount":1,"created_at":"2024-01-01T00:00:00Z"}}
            ],"balance":0}}}}"#,
            i64::MAX
        );
        std::fs::write(temp_dir.path().join("transactions.json"), json).unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_data_corruption());
        assert!(err.to_string().contains("alice"));
        assert!(!repo.contains("alice").unwrap());
    }

    #[test]
    fn test_load_tolerates_balance_mismatch() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("transactions.json"),
            r#"{"alice":{"transactions":[
                {"description":"Pay","amount":500,"created_at":"2024-01-01T00:00:00Z"}
            ],"balance":7}}"#,
        )
        .unwrap();

        repo.load().unwrap();
        let alice = repo.get("alice").unwrap().unwrap();
        assert_eq!(alice.balance, Money::from_cents(7));
        assert!(!alice.is_consistent());
    }
}
