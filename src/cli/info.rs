//! Informational commands: configuration and audit log display

use crate::config::{paths::BudgetPaths, settings::Settings};
use crate::crypto::params::{DIGEST_NAME, ITERATIONS, KEY_LEN, SALT_LEN};
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Print resolved paths and current settings
///
/// Writes `settings` to the settings file first if none exists yet, so there
/// is a file to edit.
pub fn show_config(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    let settings_file = paths.settings_file();
    if !settings_file.exists() {
        settings.save(paths)?;
        tracing::info!(path = %settings_file.display(), "wrote default settings");
    }

    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Settings file:     {}", settings_file.display());
    println!("Users file:        {}", paths.users_file().display());
    println!("Transactions file: {}", paths.transactions_file().display());
    println!("Audit log:         {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Min password length: {}", settings.min_password_length);
    println!("  Hide password input: {}", settings.hide_password_input);
    println!("  Audit enabled:       {}", settings.audit_enabled);
    println!();
    println!("Password hashing:");
    println!(
        "  PBKDF2-HMAC-{}, {} iterations, {}-byte salt, {}-byte key",
        DIGEST_NAME, ITERATIONS, SALT_LEN, KEY_LEN
    );
    Ok(())
}

/// Print the most recent audit entries
pub fn show_audit(storage: &Storage, limit: usize) -> BudgetResult<()> {
    let logger = match storage.audit_logger() {
        Some(logger) => logger,
        None => {
            println!("Audit logging is disabled.");
            return Ok(());
        }
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries in {}.", logger.path().display());
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.summary());
    }
    Ok(())
}
