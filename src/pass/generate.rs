//! Password generation.

use std::io::Write;

use super::buffer::LockedBuf;
use super::charset::{CAPACITY, Charset};
use crate::error::Result;
use crate::rand::{self, BATCH_SIZE, EntropySource};

/// Symbols generated per write.
pub const BUFFER_SIZE: usize = 4096;

// Room for a full charset, and refills never straddle the end of the buffer.
const _: () = assert!(BUFFER_SIZE > CAPACITY);
const _: () = assert!(BUFFER_SIZE % BATCH_SIZE == 0);

/// How a random byte becomes an index into the charset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// `charset[byte % len]`. Biased when `len` does not divide 256.
    #[default]
    Modulo,
    /// Discard bytes from the biased tail, then `charset[byte % len]`.
    Rejection,
}

/// Stream `length` symbols from `charset` into `out`, followed by `\n`.
///
/// Output is written and flushed one buffer at a time; on an entropy
/// failure the chunks already flushed stay in `out`.
pub fn emit<E, W>(
    charset: &Charset,
    length: usize,
    selection: Selection,
    source: &mut E,
    out: &mut W,
) -> Result<()>
where
    E: EntropySource + ?Sized,
    W: Write + ?Sized,
{
    debug_assert!(!charset.is_empty(), "charset must not be empty");

    let mut buf = LockedBuf::new(BUFFER_SIZE);
    let mut remaining = length;

    while remaining > 0 {
        let chunk = remaining.min(buf.len());

        match selection {
            Selection::Modulo => fill_modulo(charset.as_bytes(), source, &mut buf, chunk)?,
            Selection::Rejection => fill_rejection(charset, source, &mut buf, chunk)?,
        }

        out.write_all(&buf[..chunk])?;
        out.flush()?;
        remaining -= chunk;
    }

    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn fill_modulo<E: EntropySource + ?Sized>(
    chars: &[u8],
    source: &mut E,
    buf: &mut [u8],
    chunk: usize,
) -> Result<()> {
    let covered = chunk.next_multiple_of(BATCH_SIZE);
    rand::fill_batched(source, &mut buf[..covered])?;

    for b in &mut buf[..chunk] {
        *b = symbol(chars, *b);
    }
    Ok(())
}

fn fill_rejection<E: EntropySource + ?Sized>(
    charset: &Charset,
    source: &mut E,
    buf: &mut [u8],
    chunk: usize,
) -> Result<()> {
    let chars = charset.as_bytes();
    let limit = CAPACITY - CAPACITY % charset.len();
    let mut filled = 0;

    while filled < chunk {
        let end = (filled + (chunk - filled).next_multiple_of(BATCH_SIZE)).min(buf.len());
        rand::fill_batched(source, &mut buf[filled..end])?;

        // Accepted symbols are compacted to the front; `filled <= i` keeps
        // unread bytes intact.
        for i in filled..end {
            let b = buf[i];
            if usize::from(b) < limit {
                buf[filled] = symbol(chars, b);
                filled += 1;
                if filled == chunk {
                    break;
                }
            }
        }
    }
    Ok(())
}

#[inline]
fn symbol(chars: &[u8], b: u8) -> u8 {
    chars[usize::from(b) % chars.len()]
}
