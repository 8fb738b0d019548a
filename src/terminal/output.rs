//! Box drawing for help output.
//!
//! Every helper returns one finished line (or several, for wrapped options)
//! so callers decide where it is written.

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

const INNER_WIDTH: usize = BOX_WIDTH - 4;
const FLAG_COL: usize = 27;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A help option with flag and description, word-wrapped under the
/// description column.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let flag_col = FLAG_COL;
    let desc_col = INNER_WIDTH - flag_col;

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }

    wrapped
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { flag } else { "" };
            format!("{lead:<flag_col$}{line:<desc_col$}")
        })
        .map(|row| box_line(&row))
        .collect()
}

/// Display width, skipping ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
