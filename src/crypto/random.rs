//! Random byte sources for salt generation

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{BudgetError, BudgetResult};

/// A source of cryptographically secure random bytes
///
/// Injected into [`CredentialHasher`](super::CredentialHasher) so that salt
/// generation can be replaced with a deterministic source in tests.
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes
    fn fill(&self, buf: &mut [u8]) -> BudgetResult<()>;
}

/// The operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> BudgetResult<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            BudgetError::EnvironmentFailure(format!("Secure random source unavailable: {}", e))
        })
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill(&self, buf: &mut [u8]) -> BudgetResult<()> {
        (**self).fill(buf)
    }
}

/// Repeats a fixed byte pattern; only for reproducible test output
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct FixedRandom(pub Vec<u8>);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn fill(&self, buf: &mut [u8]) -> BudgetResult<()> {
        for (dst, src) in buf.iter_mut().zip(self.0.iter().cycle()) {
            *dst = *src;
        }
        Ok(())
    }
}

/// Always fails, simulating an unavailable entropy source
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingRandom;

#[cfg(test)]
impl RandomSource for FailingRandom {
    fn fill(&self, _buf: &mut [u8]) -> BudgetResult<()> {
        Err(BudgetError::EnvironmentFailure(
            "entropy source exhausted".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandom.fill(&mut a).unwrap();
        OsRandom.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fixed_random_cycles_pattern() {
        let source = FixedRandom(vec![1, 2, 3]);
        let mut buf = [0u8; 7];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_failing_random_reports_environment_failure() {
        let mut buf = [0u8; 4];
        let err = FailingRandom.fill(&mut buf).unwrap_err();
        assert!(matches!(err, BudgetError::EnvironmentFailure(_)));
    }
}
