mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

use std::ffi::OsString;
use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

use crate::exits;
use crate::rand::{EntropySource, OsEntropy};

/// Parse `args`, run against the OS random source, and map the outcome to
/// an exit status.
pub fn run(args: Vec<OsString>) -> ExitCode {
    run_with(&args, &mut OsEntropy)
}

fn run_with<E: EntropySource + ?Sized>(args: &[OsString], source: &mut E) -> ExitCode {
    let ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return exits::FAILURE;
        }
    };

    match ctx.run(source) {
        Ok(()) => exits::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            exits::FAILURE
        }
    }
}
