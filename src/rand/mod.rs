//! Secure random byte sources.

mod os;

pub use os::OsEntropy;

use crate::error::Result;

/// Largest single read issued against an entropy source.
///
/// `getentropy(2)` refuses requests above 256 bytes, so every refill stays
/// within one batch.
pub const BATCH_SIZE: usize = 256;

/// Something that can fill a buffer with cryptographically secure bytes.
///
/// Callers never ask for more than [`BATCH_SIZE`] bytes in one call.
pub trait EntropySource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Fill `dest` with back-to-back reads of at most one batch each.
pub fn fill_batched<E: EntropySource + ?Sized>(source: &mut E, dest: &mut [u8]) -> Result<()> {
    for batch in dest.chunks_mut(BATCH_SIZE) {
        source.fill(batch)?;
    }
    Ok(())
}
