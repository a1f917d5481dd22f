//! User repository for JSON storage
//!
//! Manages `users.json`: a JSON array of `{ "Username", "PasswordHash" }`
//! records.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BudgetError, BudgetResult};
use crate::models::User;

use super::file_io::{read_json, write_json_atomic};

/// Repository for registered users
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<Vec<User>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load users from disk, replacing anything in memory
    pub fn load(&self) -> BudgetResult<()> {
        let users: Vec<User> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = users;

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> BudgetResult<()> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Find a user by exact username
    pub fn find(&self, username: &str) -> BudgetResult<Option<User>> {
        let data = self.data.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|u| u.username == username).cloned())
    }

    pub fn exists(&self, username: &str) -> BudgetResult<bool> {
        Ok(self.find(username)?.is_some())
    }

    /// Add a new user (in memory; call `save` to persist)
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if the username is already taken.
    pub fn add(&self, user: User) -> BudgetResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|u| u.username == user.username) {
            return Err(BudgetError::duplicate_user(user.username));
        }

        data.push(user);
        Ok(())
    }
}
