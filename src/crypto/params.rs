//! Fixed credential-hashing parameters
//!
//! Every stored credential was produced with these values. Changing any of
//! them makes existing `PasswordHash` records unverifiable, so a rotation
//! would need a versioned stored format rather than an edit here.

/// Length of the random per-credential salt, in bytes
pub const SALT_LEN: usize = 16;

/// Length of the PBKDF2-HMAC-SHA256 output, in bytes
pub const KEY_LEN: usize = 32;

/// PBKDF2 round count
pub const ITERATIONS: u32 = 100_000;

/// Decoded length of a stored credential: salt followed by derived key
pub const STORED_LEN: usize = SALT_LEN + KEY_LEN;

/// Name of the digest used inside PBKDF2, for display purposes
pub const DIGEST_NAME: &str = "SHA-256";
