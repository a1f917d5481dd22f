//! Salted PBKDF2 password credentials
//!
//! A credential is stored as base64 of a fixed 48-byte layout:
//!
//! ```text
//! [0, 16)   random salt
//! [16, 48)  PBKDF2-HMAC-SHA256(password, salt, 100_000 rounds)
//! ```
//!
//! Hashing consumes randomness for the salt; verification is a pure function
//! of the password and the stored text.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};
use pbkdf2::pbkdf2_hmac_array;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::params::{ITERATIONS, KEY_LEN, SALT_LEN, STORED_LEN};
use super::random::{OsRandom, RandomSource};
use crate::error::{BudgetError, BudgetResult};

/// A decoded password credential: salt and derived key
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential {
    salt: [u8; SALT_LEN],
    key: [u8; KEY_LEN],
}

impl StoredCredential {
    fn from_parts(salt: [u8; SALT_LEN], key: [u8; KEY_LEN]) -> Self {
        Self { salt, key }
    }

    /// Decode a base64 credential as found in the users file
    ///
    /// # Errors
    ///
    /// Returns `DataCorruption` if the text is not valid base64 or does not
    /// decode to exactly 48 bytes.
    pub fn decode(encoded: &str) -> BudgetResult<Self> {
        let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
            BudgetError::DataCorruption(format!("Stored password hash is not valid base64: {}", e))
        })?;

        if bytes.len() != STORED_LEN {
            return Err(BudgetError::DataCorruption(format!(
                "Stored password hash is {} bytes, expected {}",
                bytes.len(),
                STORED_LEN
            )));
        }

        let (salt, key) = bytes.split_at(SALT_LEN);
        let salt = <[u8; SALT_LEN]>::try_from(salt)
            .map_err(|_| BudgetError::DataCorruption("Malformed salt segment".to_string()))?;
        let key = <[u8; KEY_LEN]>::try_from(key)
            .map_err(|_| BudgetError::DataCorruption("Malformed key segment".to_string()))?;

        Ok(Self::from_parts(salt, key))
    }

    /// Encode as base64 for storage
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// The full `salt || key` byte layout
    pub fn to_bytes(&self) -> Vec<u8> {
        [self.salt.as_slice(), self.key.as_slice()].concat()
    }

    /// The salt segment
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// The derived key segment
    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Check a candidate password against this credential
    pub fn matches(&self, password: &str) -> bool {
        let candidate = derive_key(password, &self.salt);
        constant_time_eq(candidate.as_slice(), &self.key)
    }
}

impl FromStr for StoredCredential {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

// Keep key material out of debug logs
impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("len", &STORED_LEN)
            .finish_non_exhaustive()
    }
}

/// Produces and checks salted PBKDF2 credentials
///
/// Stateless apart from its random source; the derivation parameters are the
/// constants in [`params`](super::params).
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher<R = OsRandom> {
    random: R,
}

impl CredentialHasher<OsRandom> {
    /// Create a hasher backed by the operating system CSPRNG
    pub fn new() -> Self {
        Self { random: OsRandom }
    }
}

impl<R: RandomSource> CredentialHasher<R> {
    /// Create a hasher with a specific random source
    pub fn with_source(random: R) -> Self {
        Self { random }
    }

    /// Derive a fresh credential for `password`
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentFailure` if the random source cannot supply a salt.
    pub fn hash(&self, password: &str) -> BudgetResult<StoredCredential> {
        let mut salt = [0u8; SALT_LEN];
        self.random.fill(&mut salt)?;

        let key = derive_key(password, &salt);
        Ok(StoredCredential::from_parts(salt, *key))
    }

    /// Derive a fresh credential and return its base64 storage form
    pub fn hash_password(&self, password: &str) -> BudgetResult<String> {
        Ok(self.hash(password)?.encode())
    }

    /// Check `password` against a base64 credential
    ///
    /// Returns `Ok(false)` for a wrong password.
    ///
    /// # Errors
    ///
    /// Returns `DataCorruption` if `stored` is not a well-formed credential.
    pub fn verify_password(&self, password: &str, stored: &str) -> BudgetResult<bool> {
        verify_password(password, stored)
    }
}

/// Hash a password with the operating system CSPRNG
pub fn hash_password(password: &str) -> BudgetResult<String> {
    CredentialHasher::new().hash_password(password)
}

/// Verify a password against a base64 credential
pub fn verify_password(password: &str, stored: &str) -> BudgetResult<bool> {
    let credential = StoredCredential::decode(stored)?;
    Ok(credential.matches(password))
}

fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    Zeroizing::new(pbkdf2_hmac_array::<Sha256, KEY_LEN>(
        password.as_bytes(),
        salt,
        ITERATIONS,
    ))
}

/// Compare without an early exit on the first differing byte
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}
