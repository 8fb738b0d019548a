//! Errors surfaced by password generation.

use thiserror::Error;

/// Failures that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The OS random source refused a read. Never retried.
    #[error("cannot read from the system random source ({0})")]
    EntropyUnavailable(getrandom::Error),

    /// Reading stdin or writing stdout failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
