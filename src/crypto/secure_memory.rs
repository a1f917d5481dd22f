//! Zeroizing holder for plaintext passwords
//!
//! Passwords typed at the prompt live only in memory; this wrapper wipes
//! them on drop and keeps them out of `Debug`/`Display` output.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

/// A string that is zeroed on drop and never printed
pub struct SecureString {
    inner: Zeroizing<String>,
}

impl SecureString {
    /// Wrap a plaintext value
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(s.into()),
        }
    }

    /// Borrow the plaintext
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for SecureString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
