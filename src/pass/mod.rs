//! Password generation and output.

mod buffer;
pub mod charset;
mod generate;

pub use charset::{Charset, Source};
pub use generate::{Selection, emit};
