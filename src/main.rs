use std::env;
use std::process::ExitCode;

mod cli;
mod error;
mod exits;
mod pass;
mod rand;
mod settings;
mod terminal;

fn main() -> ExitCode {
    exits::harden();

    let args = env::args_os().collect();
    cli::run(args)
}
