//! UI components for the rating TUI.
//!
//! Each component renders one kind of page element to plain text with
//! optional ANSI styling. Components hold no widget state; the app passes
//! the state to render through a view context.

mod rating_display;
mod rating_input;
mod style;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use rating_display::{RatingDisplayComponent, icon_row};
pub use rating_input::{RatingInputComponent, RatingInputViewContext, star_row};
pub use style::{EMPTY_STAR, FILLED_STAR, HALF_STAR, PULSE_STAR};
