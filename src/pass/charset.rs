//! Character set building for password generation.

use std::io::{BufRead, Read};

use zeroize::{Zeroize, Zeroizing};

use crate::error::Result;

/// One pool slot per possible byte value.
pub const CAPACITY: usize = 1 << u8::BITS;

/// Upper bound on one `-C` line read from stdin.
pub const INPUT_LIMIT: usize = 4096;

pub const LOWERCASE: &[u8] = b"qwertyuiopasdfghjklzxcvbnm";
pub const UPPERCASE: &[u8] = b"QWERTYUIOPASDFGHJKLZXCVBNM";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIALS: &[u8] = b"^*+-=_?.,:;\\|/\"'$%&@#()[]{}";

/// Used when every requested source together contributed nothing.
pub const DEFAULT: [&[u8]; 3] = [LOWERCASE, UPPERCASE, DIGITS];

/// Where a run of charset bytes comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Lowercase,
    Uppercase,
    Digits,
    Specials,
    Custom(Zeroizing<Vec<u8>>),
    Stdin,
}

impl Source {
    pub fn custom(bytes: &[u8]) -> Self {
        Source::Custom(Zeroizing::new(bytes.to_vec()))
    }
}

/// Fixed-capacity pool of candidate symbols, in append order.
/// Duplicates are kept.
pub struct Charset {
    pool: [u8; CAPACITY],
    len: usize,
}

impl Charset {
    pub fn new() -> Self {
        Self {
            pool: [0; CAPACITY],
            len: 0,
        }
    }

    /// Build the pool from `sources` in order, reading `-C` lines from `stdin`.
    /// Falls back to [`DEFAULT`] when the result is empty.
    pub fn build<R: BufRead>(sources: &[Source], stdin: &mut R) -> Result<Self> {
        let mut charset = Self::new();

        for source in sources {
            match source {
                Source::Lowercase => charset.append(LOWERCASE),
                Source::Uppercase => charset.append(UPPERCASE),
                Source::Digits => charset.append(DIGITS),
                Source::Specials => charset.append(SPECIALS),
                Source::Custom(bytes) => charset.append(bytes),
                Source::Stdin => charset.append(&read_line(stdin)?),
            };
        }

        if charset.is_empty() {
            for class in DEFAULT {
                charset.append(class);
            }
        }

        Ok(charset)
    }

    /// Saturating append: copies the prefix of `source` that fits and returns
    /// the new length. `source` ends at its first NUL, if any.
    pub fn append(&mut self, source: &[u8]) -> usize {
        let end = source.iter().position(|&b| b == 0).unwrap_or(source.len());
        let n = end.min(CAPACITY - self.len);

        self.pool[self.len..self.len + n].copy_from_slice(&source[..n]);
        self.len += n;
        self.len
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pool[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Charset {
    fn drop(&mut self) {
        self.pool.zeroize();
    }
}

/// Read one line (at most [`INPUT_LIMIT`] bytes) and strip a single
/// trailing `\n`. Nothing else is trimmed.
fn read_line<R: BufRead>(stdin: &mut R) -> Result<Zeroizing<Vec<u8>>> {
    // Sized up front so the line is never reallocated and left behind unwiped.
    let mut line = Zeroizing::new(Vec::with_capacity(INPUT_LIMIT));
    stdin
        .by_ref()
        .take(INPUT_LIMIT as u64)
        .read_until(b'\n', &mut line)?;

    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(line)
}
