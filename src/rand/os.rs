//! OS-provided CSPRNG via `getrandom`.

use super::EntropySource;
use crate::error::{Error, Result};

/// System random source:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/BSD: `getentropy()`
/// - Windows: `ProcessPrng`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest).map_err(Error::EntropyUnavailable)
    }
}
