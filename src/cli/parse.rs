//! getopt-style argument parsing (optstring `hVn:c:Cludsr`).

use std::ffi::OsString;

use thiserror::Error;

use super::CliFlags;
use crate::pass::{Selection, Source};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("illegal option -- {0}")]
    UnknownOption(char),
    #[error("option requires an argument -- {0}")]
    MissingValue(char),
}

/// Parse `args` (including the program name) left to right.
///
/// Stops at `--`, at the first operand, or as soon as `-h`/`-V` is seen.
/// Operands are ignored.
pub fn parse(args: &[OsString]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_encoded_bytes();
        if arg == b"--" || arg.len() < 2 || arg[0] != b'-' {
            break;
        }

        let mut j = 1;
        while j < arg.len() {
            let opt = arg[j];
            j += 1;

            match opt {
                b'h' => {
                    flags.help = true;
                    return Ok(flags);
                }
                b'V' => {
                    flags.version = true;
                    return Ok(flags);
                }
                b'l' => flags.settings.sources.push(Source::Lowercase),
                b'u' => flags.settings.sources.push(Source::Uppercase),
                b'd' => flags.settings.sources.push(Source::Digits),
                b's' => flags.settings.sources.push(Source::Specials),
                b'C' => flags.settings.sources.push(Source::Stdin),
                b'r' => flags.settings.selection = Selection::Rejection,
                b'n' | b'c' => {
                    // Value is the rest of this argument, or the next one.
                    let value = if j < arg.len() {
                        let rest = &arg[j..];
                        j = arg.len();
                        rest
                    } else {
                        i += 1;
                        args.get(i)
                            .map(|a| a.as_encoded_bytes())
                            .ok_or(ParseError::MissingValue(char::from(opt)))?
                    };

                    if opt == b'n' {
                        flags.settings.pass_length = parse_length(value);
                    } else {
                        flags.settings.sources.push(Source::custom(value));
                    }
                }
                other => return Err(ParseError::UnknownOption(char::from(other))),
            }
        }
        i += 1;
    }

    Ok(flags)
}

/// Decimal prefix of `s`; stops at the first non-digit. No digits is 0.
/// Saturates at `usize::MAX`.
pub fn parse_length(s: &[u8]) -> usize {
    s.iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0usize, |n, &d| {
            n.saturating_mul(10).saturating_add(usize::from(d - b'0'))
        })
}
