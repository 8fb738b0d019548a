//! CLI context - parsed flags plus the run that acts on them.

use std::ffi::OsString;
use std::io;

use super::{CliFlags, ParseError, print_help};
use crate::error::Result;
use crate::pass::{self, Charset};
use crate::rand::EntropySource;

/// Application context for one invocation.
pub struct Context {
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[OsString]) -> std::result::Result<Self, ParseError> {
        let flags = super::parse(args)?;
        Ok(Self { flags })
    }

    /// Act on the flags, drawing password bytes from `source`.
    pub fn run<E: EntropySource + ?Sized>(&self, source: &mut E) -> Result<()> {
        if self.flags.is_info_only() {
            return self.handle_info_flags();
        }
        self.generate_output(source)
    }

    fn handle_info_flags(&self) -> Result<()> {
        if self.flags.help {
            print_help()?;
        } else if self.flags.version {
            println!("pgen {}", env!("CARGO_PKG_VERSION"));
        }
        Ok(())
    }

    /// Build the charset (reading stdin for `-C`) and stream one password
    /// to stdout.
    fn generate_output<E: EntropySource + ?Sized>(&self, source: &mut E) -> Result<()> {
        let settings = &self.flags.settings;

        let charset = {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            Charset::build(&settings.sources, &mut input)?
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        pass::emit(
            &charset,
            settings.pass_length,
            settings.selection,
            source,
            &mut out,
        )
    }
}
