//! Locked, self-wiping scratch buffer for generated symbols.

use std::ops::{Deref, DerefMut};

use zeroize::Zeroize;

/// Heap buffer pinned in RAM (best effort) and zeroed on drop.
pub struct LockedBuf {
    bytes: Box<[u8]>,
    locked: bool,
}

impl LockedBuf {
    pub fn new(len: usize) -> Self {
        let bytes = vec![0u8; len].into_boxed_slice();
        let locked = lock(&bytes);
        Self { bytes, locked }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Deref for LockedBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for LockedBuf {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Drop for LockedBuf {
    fn drop(&mut self) {
        self.bytes.zeroize();
        if self.locked {
            unlock(&self.bytes);
        }
    }
}

// mlock failure (RLIMIT_MEMLOCK, no privilege) is not fatal; the buffer is
// still wiped on drop.
#[cfg(unix)]
fn lock(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && unsafe { libc::mlock(bytes.as_ptr() as *const libc::c_void, bytes.len()) == 0 }
}

#[cfg(unix)]
fn unlock(bytes: &[u8]) {
    unsafe { libc::munlock(bytes.as_ptr() as *const libc::c_void, bytes.len()) };
}

#[cfg(not(unix))]
fn lock(_: &[u8]) -> bool {
    false
}

#[cfg(not(unix))]
fn unlock(_: &[u8]) {}
