//! Rating container component.
//!
//! Renders one container as a row of five stars followed by the submit
//! control, with the feedback message on the line below when one is shown.

use super::style::{self, BOLD, DIM, GREEN, RED};
use super::{EMPTY_STAR, FILLED_STAR, PULSE_STAR};
use crate::page::{FeedbackTone, RatingContainer, StarControl};
use crate::widget::RatingWidget;

/// Context for rendering one rating container.
#[derive(Debug, Clone, Copy)]
pub struct RatingInputViewContext<'a> {
    /// Widget whose container is drawn.
    pub widget: &'a RatingWidget,
    /// Whether keyboard focus is on this container.
    pub focused: bool,
}

/// Component for rating containers.
#[derive(Debug, Clone, Default)]
pub struct RatingInputComponent {
    label_width: usize,
}

impl RatingInputComponent {
    /// Creates a component whose item labels are padded to `label_width`
    /// characters so the star rows line up.
    #[must_use]
    pub const fn new(label_width: usize) -> Self {
        Self { label_width }
    }

    /// Renders the container, ending with a newline.
    #[must_use]
    pub fn view(&self, ctx: &RatingInputViewContext<'_>) -> String {
        let container = ctx.widget.container();
        let cursor = if ctx.focused { '>' } else { ' ' };
        let padded = format!(
            "{:<width$}",
            format!("Item {}", container.item_id()),
            width = self.label_width
        );
        let label = if ctx.focused {
            style::paint(BOLD, &padded)
        } else {
            padded
        };

        let mut output = format!("{cursor} {label}  {}", star_row(container.stars()));
        if let Some(submit) = render_submit(container) {
            output.push_str("  ");
            output.push_str(&submit);
        }
        output.push('\n');

        if let Some(message) = container.feedback().and_then(|region| region.message()) {
            let colour = match message.tone {
                FeedbackTone::Success => GREEN,
                FeedbackTone::Error => RED,
            };
            output.push_str(&" ".repeat(self.label_width.saturating_add(4)));
            output.push_str(&style::paint(colour, &message.text));
            output.push('\n');
        }

        output
    }
}

/// Renders the five star glyphs separated by spaces.
#[must_use]
pub fn star_row(stars: &[StarControl]) -> String {
    let glyphs: Vec<String> = stars
        .iter()
        .map(|star| {
            let glyph = if star.is_pulsing() {
                PULSE_STAR
            } else if star.is_filled() {
                FILLED_STAR
            } else {
                EMPTY_STAR
            };
            glyph.to_string()
        })
        .collect();
    glyphs.join(" ")
}

fn render_submit(container: &RatingContainer) -> Option<String> {
    let submit = container.submit().filter(|control| control.is_visible())?;
    let button = format!("[{}]", submit.label());
    Some(if submit.is_disabled() {
        style::paint(DIM, &button)
    } else {
        button
    })
}

#[cfg(test)]
#[path = "rating_input_tests.rs"]
mod tests;
