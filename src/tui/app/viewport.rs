//! Frame normalisation to the terminal size.
//!
//! Rows shorter than the previous frame would leave stale cells behind, so
//! every row is padded with spaces; rows are clamped one column short of
//! the terminal width to avoid autowrap. ANSI sequences pass through
//! without counting towards the width, and a reset is appended when a
//! truncated row would otherwise leak its style.

use unicode_width::UnicodeWidthChar;

const RESET: &str = "\x1b[0m";

/// Pads or truncates `output` to exactly `height` rows of `width - 1`
/// visible columns.
#[must_use]
pub fn normalise_viewport(output: &str, width: u16, height: u16) -> String {
    let row_width = usize::from(width.max(1)).saturating_sub(1).max(1);
    let row_count = usize::from(height.max(1));

    let mut rows: Vec<String> = output
        .lines()
        .take(row_count)
        .map(|line| fit_row(line, row_width))
        .collect();
    let blank = " ".repeat(row_width);
    rows.resize(row_count, blank);

    let mut frame = rows.join("\n");
    frame.push('\n');
    frame
}

fn fit_row(line: &str, width: usize) -> String {
    let mut row = String::with_capacity(line.len().saturating_add(width));
    let mut visible = 0_usize;
    let mut in_escape = false;
    let mut styled = false;
    let mut reset_pending = false;

    for ch in line.chars() {
        if in_escape {
            row.push(ch);
            if ch.is_ascii_alphabetic() {
                in_escape = false;
                reset_pending = !row.ends_with(RESET);
            }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            styled = true;
            row.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        row.push(ch);
        visible = visible.saturating_add(char_width);
    }

    if styled && reset_pending {
        row.push_str(RESET);
    }
    row.push_str(&" ".repeat(width.saturating_sub(visible)));
    row
}
