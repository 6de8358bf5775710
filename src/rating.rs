//! Star arithmetic: highlighting, pending-value parsing, and display icons.
//!
//! Everything here is pure. The widget reducer and the renderers call into
//! these helpers so that the visual state of a container or display is
//! always derived from a single number.

use std::fmt;

use crate::page::StarControl;

/// Number of star controls in every rating container and display.
pub const STAR_COUNT: usize = 5;

/// Highest rating a user can commit.
pub const MAX_RATING: u8 = 5;

/// Visual state of an interactive star control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarFill {
    /// The star is drawn solid.
    Filled,
    /// The star is drawn as an outline.
    #[default]
    Empty,
}

/// Icon shown by an aggregate rating display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayIcon {
    /// Whole star.
    Full,
    /// Half star, used for the fractional part of the average.
    Half,
    /// Outline star.
    #[default]
    Empty,
}

/// A committed rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    /// Wraps a star position, rejecting values outside `1..=5`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= MAX_RATING {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Average rating together with the text the server rendered for it.
///
/// The text is kept verbatim so that a display shows exactly what the
/// server sent (for example `4.5`), while the numeric value drives the icons.
#[derive(Debug, Clone, PartialEq)]
pub struct Average {
    value: f64,
    text: String,
}

impl Average {
    /// Builds an average from a JSON number, rendering it the way a browser
    /// would (`4.0` becomes `4`).
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }

    /// Parses an average from server-provided text such as `"4.5"`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().map(|value| Self {
            value,
            text: text.trim().to_owned(),
        })
    }

    /// Numeric average.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Text shown next to the display icons.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Fills the first `count` stars and empties the rest.
///
/// There is no bounds error: counts above the number of stars fill every
/// star, and zero or negative counts fill none. Calling this twice with the
/// same count leaves the same visible state.
pub fn highlight(stars: &mut [StarControl], count: i64) {
    for (index, star) in stars.iter_mut().enumerate() {
        let filled = i64::try_from(index).is_ok_and(|position| position < count);
        star.set_fill(if filled {
            StarFill::Filled
        } else {
            StarFill::Empty
        });
    }
}

/// Parses the hidden field of a container into a pending value.
///
/// Follows integer-prefix semantics: leading whitespace and an optional `+`
/// are skipped, leading digits are read and anything after them ignored.
/// Absent, empty, negative, or digit-free input yields `0`. The result is
/// clamped to [`MAX_RATING`].
#[must_use]
pub fn parse_pending(raw: Option<&str>) -> u8 {
    let Some(text) = raw else {
        return 0;
    };

    let trimmed = text.trim_start();
    if trimmed.starts_with('-') {
        return 0;
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }

    digits.parse::<u64>().map_or(MAX_RATING, |value| {
        u8::try_from(value.min(u64::from(MAX_RATING))).unwrap_or(MAX_RATING)
    })
}

/// Computes the five display icons for an average rating.
///
/// Icon `i` (1-based) is full when `i <= floor(average)`, half when
/// `i - 1 < average < i`, and empty otherwise. A NaN average renders as
/// all-empty.
#[must_use]
pub fn display_icons(average: f64) -> [DisplayIcon; STAR_COUNT] {
    let mut icons = [DisplayIcon::Empty; STAR_COUNT];
    for (position, icon) in (1_u8..).zip(icons.iter_mut()) {
        *icon = icon_for(position, average);
    }
    icons
}

fn icon_for(position: u8, average: f64) -> DisplayIcon {
    let upper = f64::from(position);
    let lower = f64::from(position.saturating_sub(1));

    if upper <= average.floor() {
        DisplayIcon::Full
    } else if lower < average && average < upper {
        DisplayIcon::Half
    } else {
        DisplayIcon::Empty
    }
}

/// Formats the pluralised rating count, e.g. `(1 rating)` or `(2 ratings)`.
#[must_use]
pub fn count_label(count: u64) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("({count} rating{suffix})")
}

#[cfg(test)]
#[path = "rating_tests.rs"]
mod tests;
