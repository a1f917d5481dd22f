//! Password credential handling
//!
//! Salted PBKDF2-HMAC-SHA256 hashing and verification of user passwords,
//! with an injectable random source for salts.

pub mod credential;
pub mod params;
pub mod random;
pub mod secure_memory;

pub use credential::{hash_password, verify_password, CredentialHasher, StoredCredential};
pub use random::{OsRandom, RandomSource};
pub use secure_memory::SecureString;
