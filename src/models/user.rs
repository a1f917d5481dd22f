//! User model
//!
//! A registered user and their stored password credential. Field names are
//! serialized in PascalCase to match the `users.json` record layout.

use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Login name, matched exactly (case-sensitive)
    pub username: String,

    /// Base64 salt-and-key credential produced by the credential hasher
    pub password_hash: String,
}

impl User {
    /// Create a user record from an already-hashed credential
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
