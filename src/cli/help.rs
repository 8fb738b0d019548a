//! Usage text.

use std::io::{self, Write};

use crate::pass::charset::{DEFAULT, SPECIALS};
use crate::settings::DEFAULT_LENGTH;
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

/// Render the help screen as lines of box-drawn text.
pub fn help_lines() -> Vec<String> {
    let default_charset: String = DEFAULT
        .iter()
        .flat_map(|class| class.iter().copied().map(char::from))
        .collect();
    let specials: String = SPECIALS.iter().copied().map(char::from).collect();

    let mut lines = vec![
        box_top("PGen"),
        box_line_center("Password generator backed by the OS random source"),
        box_line(""),
        box_line("USAGE:"),
        box_line("  pgen [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
    ];
    lines.extend(box_opt("  -h", "Print this message"));
    lines.extend(box_opt("  -V", "Print version"));
    lines.extend(box_opt(
        "  -n <NUMBER>",
        &format!("Password length (default: {DEFAULT_LENGTH})"),
    ));
    lines.extend(box_opt(
        "  -r",
        "Unbiased selection: discard random bytes that would favour the start of the charset",
    ));
    lines.push(box_line(""));
    lines.push(box_line(" Charset (sources add up, in order):"));
    lines.extend(box_opt("  -c <STRING>", "Add a custom string"));
    lines.extend(box_opt("  -C", "Add one line read from stdin"));
    lines.extend(box_opt("  -l", "Add lower letters"));
    lines.extend(box_opt("  -u", "Add upper letters"));
    lines.extend(box_opt("  -d", "Add digits"));
    lines.extend(box_opt("  -s", &format!("Add special characters {specials}")));
    lines.push(box_line(""));
    lines.push(box_line(" With no charset options the default is:"));
    lines.push(box_line(&format!("  {default_charset}")));
    lines.push(box_line(""));
    lines.push(box_line("EXAMPLES:"));
    lines.push(box_line("  pgen                     8 characters, default charset"));
    lines.push(box_line("  pgen -n 20 -lds           20 characters, no upper letters"));
    lines.push(box_line("  pgen -n 6 -c 0123456789   6-digit PIN"));
    lines.push(box_line("  echo abc | pgen -C        Charset read from stdin"));
    lines.push(box_bottom());
    lines
}

pub fn print_help() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in help_lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
