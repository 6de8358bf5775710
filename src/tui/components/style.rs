//! Glyphs and ANSI styles shared by the components.

/// Solid star.
pub const FILLED_STAR: char = '★';

/// Outline star.
pub const EMPTY_STAR: char = '☆';

/// Half star used by aggregate displays.
pub const HALF_STAR: char = '⯪';

/// Star drawn while the "selected" pulse is showing.
pub const PULSE_STAR: char = '✦';

pub(super) const BOLD: &str = "\x1b[1m";
pub(super) const GREEN: &str = "\x1b[32m";
pub(super) const RED: &str = "\x1b[31m";
pub(super) const DIM: &str = "\x1b[2m";
pub(super) const RESET: &str = "\x1b[0m";

/// Wraps `text` in an ANSI style.
pub(super) fn paint(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}
