//! Password generation settings.

use crate::pass::{Selection, Source};

pub const DEFAULT_LENGTH: usize = 8;

/// Everything one run needs, as assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    /// Charset sources in command-line order.
    pub sources: Vec<Source>,
    pub selection: Selection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            sources: Vec::new(),
            selection: Selection::Modulo,
        }
    }
}
