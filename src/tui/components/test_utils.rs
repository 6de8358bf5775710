//! Test utilities for TUI component tests.

/// Strips ANSI escape sequences from rendered output.
///
/// ```
/// use starboard::tui::components::test_utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[32mSaved\x1b[0m"), "Saved");
/// ```
#[must_use]
pub fn strip_ansi_codes(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            plain.push(ch);
        }
    }

    plain
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::strip_ansi_codes;

    #[rstest]
    #[case::plain("★ ★ ☆", "★ ★ ☆")]
    #[case::colour("\x1b[31mError\x1b[0m", "Error")]
    #[case::bold_prefix("\x1b[1m> Item 7\x1b[0m  ★", "> Item 7  ★")]
    fn strips_escape_sequences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_ansi_codes(input), expected);
    }
}
