//! Authentication service
//!
//! Registration and login on top of the user repository and the credential
//! hasher. A wrong password and an unknown username produce the same
//! `InvalidCredentials` error; an unreadable stored hash is reported as
//! `DataCorruption` instead of being folded into a failed login.

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::crypto::{CredentialHasher, OsRandom, RandomSource};
use crate::error::{BudgetError, BudgetResult};
use crate::models::User;
use crate::storage::Storage;

/// Service for registering users and checking logins
pub struct AuthService<'a, R = OsRandom> {
    storage: &'a Storage,
    settings: &'a Settings,
    hasher: CredentialHasher<R>,
}

impl<'a> AuthService<'a, OsRandom> {
    /// Create an auth service using the OS random source for salts
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self::with_hasher(storage, settings, CredentialHasher::new())
    }
}

impl<'a, R: RandomSource> AuthService<'a, R> {
    /// Create an auth service with a specific hasher
    pub fn with_hasher(
        storage: &'a Storage,
        settings: &'a Settings,
        hasher: CredentialHasher<R>,
    ) -> Self {
        Self {
            storage,
            settings,
            hasher,
        }
    }

    /// Register a new user and give them an empty ledger
    pub fn register(&self, username: &str, password: &str) -> BudgetResult<User> {
        if username.is_empty() {
            return Err(BudgetError::Validation("Username cannot be empty".into()));
        }

        if self.storage.users.exists(username)? {
            return Err(BudgetError::duplicate_user(username));
        }

        self.validate_new_password(password)?;

        let password_hash = self.hasher.hash_password(password)?;
        let user = User::new(username, password_hash);

        self.storage.users.add(user.clone())?;
        self.storage.users.save()?;

        self.storage.ledgers.ensure(username)?;
        self.storage.ledgers.save()?;

        self.storage
            .log_audit(&AuditEntry::user_registered(username));
        tracing::info!(%username, "user registered");

        Ok(user)
    }

    /// Check a login attempt
    ///
    /// On success the user's ledger is created if it was missing.
    pub fn login(&self, username: &str, password: &str) -> BudgetResult<User> {
        if username.is_empty() {
            return Err(BudgetError::Validation("Username cannot be empty".into()));
        }
        if password.is_empty() {
            return Err(BudgetError::Validation("Password cannot be empty".into()));
        }

        let user = match self.storage.users.find(username)? {
            Some(user) => user,
            None => return self.reject(username),
        };

        let verified = self
            .hasher
            .verify_password(password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(%username, error = %e, "stored credential is unreadable");
                match e {
                    BudgetError::DataCorruption(msg) => BudgetError::DataCorruption(format!(
                        "Account record for '{}' is corrupt: {}",
                        username, msg
                    )),
                    other => other,
                }
            })?;

        if !verified {
            return self.reject(username);
        }

        if self.storage.ledgers.ensure(username)? {
            self.storage.ledgers.save()?;
        }

        self.storage
            .log_audit(&AuditEntry::login_succeeded(username));
        tracing::info!(%username, "login succeeded");

        Ok(user)
    }

    fn reject(&self, username: &str) -> BudgetResult<User> {
        self.storage.log_audit(&AuditEntry::login_failed(username));
        tracing::info!(%username, "login rejected");
        Err(BudgetError::InvalidCredentials)
    }

    fn validate_new_password(&self, password: &str) -> BudgetResult<()> {
        let min = self.settings.min_password_length.max(1);
        let len = password.chars().count();

        if len == 0 {
            return Err(BudgetError::Validation("Password cannot be empty".into()));
        }
        if len < min {
            return Err(BudgetError::Validation(format!(
                "Password must be at least {} characters",
                min
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEvent;
    use crate::config::paths::BudgetPaths;
    use crate::crypto::random::FailingRandom;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_then_login() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = AuthService::new(&storage, &settings);

        let registered = service.register("alice", "s3cret").unwrap();
        assert_ne!(registered.password_hash, "s3cret");
        assert!(storage.ledgers.contains("alice").unwrap());

        let user = service.login("alice", "s3cret").unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_register_persists_to_disk() {
        let (temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        AuthService::new(&storage, &settings)
            .register("alice", "pw")
            .unwrap();

        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();

        let user = reloaded.users.find("alice").unwrap().unwrap();
        assert!(crate::crypto::verify_password("pw", &user.password_hash).unwrap());
        assert!(reloaded.ledgers.contains("alice").unwrap());
    }

    #[test]
    fn test_register_rejects_empty_fields_and_duplicates() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = AuthService::new(&storage, &settings);

        assert!(service.register("", "pw").unwrap_err().is_validation());
        assert!(service.register("alice", "").unwrap_err().is_validation());

        service.register("alice", "pw").unwrap();
        let err = service.register("alice", "other").unwrap_err();
        assert!(matches!(err, BudgetError::Duplicate { .. }));
    }

    #[test]
    fn test_register_enforces_min_length() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            min_password_length: 8,
            ..Settings::default()
        };
        let service = AuthService::new(&storage, &settings);

        let err = service.register("alice", "short").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Password must be at least 8 characters"
        );
        assert!(!storage.users.exists("alice").unwrap());
    }

    #[test]
    fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = AuthService::new(&storage, &settings);
        service.register("alice", "right").unwrap();

        let wrong = service.login("alice", "wrong").unwrap_err();
        let unknown = service.login("nobody", "right").unwrap_err();

        assert!(wrong.is_invalid_credentials());
        assert!(unknown.is_invalid_credentials());
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn test_corrupt_hash_is_not_a_failed_login() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        storage.users.add(User::new("alice", "AAAA")).unwrap();

        let err = AuthService::new(&storage, &settings)
            .login("alice", "anything")
            .unwrap_err();

        assert!(err.is_data_corruption());
        assert!(err.to_string().contains("alice"));
    }

    #[test]
    fn test_login_creates_missing_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let hash = crate::crypto::hash_password("pw").unwrap();
        storage.users.add(User::new("legacy", hash)).unwrap();
        assert!(!storage.ledgers.contains("legacy").unwrap());

        AuthService::new(&storage, &settings)
            .login("legacy", "pw")
            .unwrap();

        assert!(storage.ledgers.contains("legacy").unwrap());
    }

    #[test]
    fn test_random_failure_aborts_registration() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = AuthService::with_hasher(
            &storage,
            &settings,
            CredentialHasher::with_source(FailingRandom),
        );

        let err = service.register("alice", "pw").unwrap_err();
        assert!(matches!(err, BudgetError::EnvironmentFailure(_)));
        assert!(!storage.users.exists("alice").unwrap());
        assert!(!storage.ledgers.contains("alice").unwrap());
    }

    #[test]
    fn test_audit_failure_does_not_change_outcome() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let settings = Settings::default();
        let service = AuthService::new(&storage, &settings);

        service.register("alice", "pw").unwrap();
        assert!(storage.users.exists("alice").unwrap());

        assert!(service
            .login("alice", "wrong")
            .unwrap_err()
            .is_invalid_credentials());
        assert!(service
            .login("nobody", "pw")
            .unwrap_err()
            .is_invalid_credentials());
        assert_eq!(service.login("alice", "pw").unwrap().username, "alice");
    }

    #[test]
    fn test_audit_trail() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = AuthService::new(&storage, &settings);

        service.register("alice", "pw").unwrap();
        service.login("alice", "pw").unwrap();
        let _ = service.login("alice", "nope");

        let events: Vec<_> = storage
            .audit_logger()
            .unwrap()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.event)
            .collect();
        assert_eq!(
            events,
            vec![
                AuditEvent::UserRegistered,
                AuditEvent::LoginSucceeded,
                AuditEvent::LoginFailed
            ]
        );

        let raw = std::fs::read_to_string(storage.paths().audit_log()).unwrap();
        assert!(!raw.contains("pw\""));
        assert!(!raw.contains("PasswordHash"));
    }
}
