//! Centralized diagnostics for CLI output.
//!
//! Everything here goes to stderr; stdout carries only passwords, help and
//! version text.

use std::io;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

const PREFIX: &str = "pgen: ";

/// Print an error message to stderr, red when stderr is a terminal.
pub fn error(msg: &str) {
    let line = format!("{PREFIX}{msg}");
    if io::stderr().is_tty() {
        eprintln!("{}", line.red());
    } else {
        eprintln!("{line}");
    }
}

/// Hint printed after an argument error.
pub fn usage_hint() {
    eprintln!("Try 'pgen -h' for more information.");
}
