//! Page model: rating containers, star controls, and aggregate displays.
//!
//! A page is the explicit counterpart of the markup a template renders: a
//! list of rating containers (one per rated item) and a list of displays
//! that show the aggregate rating for an item, possibly several times.
//! Pages are loaded from a JSON manifest, see [`manifest`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rating::{self, Average, DisplayIcon, STAR_COUNT, StarFill};

pub mod manifest;

pub use manifest::{Discovery, PageManifest, SkippedContainer};

/// Label shown on the submit control while a submission is in flight.
pub const BUSY_LABEL: &str = "Submitting...";

/// Default label of the submit control.
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit rating";

/// Opaque identifier of a rated item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps an identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the five interactive stars of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarControl {
    position: u8,
    fill: StarFill,
    pulsing: bool,
}

impl StarControl {
    /// Creates an empty star at the given 1-based position.
    #[must_use]
    pub const fn new(position: u8) -> Self {
        Self {
            position,
            fill: StarFill::Empty,
            pulsing: false,
        }
    }

    /// Creates the full row of empty stars, positions 1 to 5.
    #[must_use]
    pub fn row() -> Vec<Self> {
        (1_u8..).take(STAR_COUNT).map(Self::new).collect()
    }

    /// 1-based position of the star.
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Rating committed when the star is activated; equal to its position.
    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.position
    }

    /// Whether the star is drawn solid.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.fill == StarFill::Filled
    }

    /// Whether the transient "selected" pulse is showing.
    #[must_use]
    pub const fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    pub(crate) const fn set_fill(&mut self, fill: StarFill) {
        self.fill = fill;
    }

    pub(crate) const fn set_pulsing(&mut self, pulsing: bool) {
        self.pulsing = pulsing;
    }
}

/// The button that submits a container's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    visible: bool,
    disabled: bool,
}

impl SubmitControl {
    /// Creates a hidden, enabled submit control.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: false,
            disabled: false,
        }
    }

    /// Marks the control visible from the start.
    #[must_use]
    pub const fn shown(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Current label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the control is revealed.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the control ignores activation.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) const fn reveal(&mut self) {
        self.visible = true;
    }

    /// Disables the control and swaps in the busy label, returning the
    /// label it replaced.
    pub(crate) fn enter_busy(&mut self) -> String {
        self.disabled = true;
        std::mem::replace(&mut self.label, BUSY_LABEL.to_owned())
    }

    pub(crate) fn leave_busy(&mut self, original_label: String) {
        self.disabled = false;
        self.label = original_label;
    }
}

/// Tone of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    /// The rating was saved.
    Success,
    /// The rating could not be saved.
    Error,
}

/// A message shown in a feedback region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Success or error styling.
    pub tone: FeedbackTone,
    /// Message text.
    pub text: String,
}

/// Region that shows the outcome of the last submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackRegion {
    message: Option<Feedback>,
}

impl FeedbackRegion {
    /// The visible message, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&Feedback> {
        self.message.as_ref()
    }

    pub(crate) fn show(&mut self, tone: FeedbackTone, text: &str) {
        self.message = Some(Feedback {
            tone,
            text: text.to_owned(),
        });
    }

    pub(crate) fn hide(&mut self) {
        self.message = None;
    }
}

/// Target and field names of a container's rating form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// URL the form posts to; may be relative to the configured base URL.
    pub action: String,
    /// Name of the field carrying the item identifier.
    pub item_field: String,
    /// Name of the field carrying the rating value.
    pub rating_field: String,
    /// Additional hidden fields sent verbatim (e.g. a CSRF token).
    pub extra_fields: Vec<(String, String)>,
}

impl FormSpec {
    /// Creates a form with the default `item_id` and `rating` field names.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            item_field: "item_id".to_owned(),
            rating_field: "rating".to_owned(),
            extra_fields: Vec::new(),
        }
    }

    /// Adds an extra hidden field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_fields.push((name.into(), value.into()));
        self
    }
}

/// The DOM-equivalent subtree of one item's rating widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingContainer {
    item_id: ItemId,
    hidden_value: Option<String>,
    stars: Vec<StarControl>,
    form: Option<FormSpec>,
    submit: Option<SubmitControl>,
    feedback: Option<FeedbackRegion>,
}

impl RatingContainer {
    /// Creates a bare container with five empty stars and no optional parts.
    #[must_use]
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            hidden_value: None,
            stars: StarControl::row(),
            form: None,
            submit: None,
            feedback: None,
        }
    }

    /// Pre-populates the hidden rating field.
    #[must_use]
    pub fn with_hidden_value(mut self, value: impl Into<String>) -> Self {
        self.hidden_value = Some(value.into());
        self
    }

    /// Attaches a rating form.
    #[must_use]
    pub fn with_form(mut self, form: FormSpec) -> Self {
        self.form = Some(form);
        self
    }

    /// Attaches a submit control.
    #[must_use]
    pub fn with_submit(mut self, submit: SubmitControl) -> Self {
        self.submit = Some(submit);
        self
    }

    /// Attaches an empty feedback region.
    #[must_use]
    pub fn with_feedback(mut self) -> Self {
        self.feedback = Some(FeedbackRegion::default());
        self
    }

    /// Identifier of the rated item.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Raw content of the hidden rating field.
    #[must_use]
    pub fn hidden_value(&self) -> Option<&str> {
        self.hidden_value.as_deref()
    }

    /// Pending rating parsed from the hidden field (`0` when unset).
    #[must_use]
    pub fn pending(&self) -> u8 {
        rating::parse_pending(self.hidden_value())
    }

    /// The five star controls in position order.
    #[must_use]
    pub fn stars(&self) -> &[StarControl] {
        &self.stars
    }

    /// Number of stars currently filled.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.stars.iter().filter(|star| star.is_filled()).count()
    }

    /// The rating form, if the container has one.
    #[must_use]
    pub const fn form(&self) -> Option<&FormSpec> {
        self.form.as_ref()
    }

    /// The submit control, if present.
    #[must_use]
    pub const fn submit(&self) -> Option<&SubmitControl> {
        self.submit.as_ref()
    }

    /// The feedback region, if present.
    #[must_use]
    pub const fn feedback(&self) -> Option<&FeedbackRegion> {
        self.feedback.as_ref()
    }

    pub(crate) fn set_hidden_value(&mut self, value: u8) {
        self.hidden_value = Some(value.to_string());
    }

    pub(crate) fn highlight(&mut self, count: i64) {
        rating::highlight(&mut self.stars, count);
    }

    pub(crate) fn star_mut(&mut self, position: u8) -> Option<&mut StarControl> {
        self.stars
            .iter_mut()
            .find(|star| star.position() == position)
    }

    pub(crate) fn clear_pulses(&mut self) {
        for star in &mut self.stars {
            star.set_pulsing(false);
        }
    }

    pub(crate) const fn submit_mut(&mut self) -> Option<&mut SubmitControl> {
        self.submit.as_mut()
    }

    pub(crate) const fn feedback_mut(&mut self) -> Option<&mut FeedbackRegion> {
        self.feedback.as_mut()
    }
}

/// Aggregate rating shown somewhere on the page for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDisplay {
    item_id: ItemId,
    icons: [DisplayIcon; STAR_COUNT],
    average_text: String,
    count_text: String,
}

impl RatingDisplay {
    /// Creates a display showing the given average and count.
    #[must_use]
    pub fn new(item_id: ItemId, average: &Average, count: u64) -> Self {
        let mut display = Self {
            item_id,
            icons: [DisplayIcon::Empty; STAR_COUNT],
            average_text: String::new(),
            count_text: String::new(),
        };
        display.apply_summary(average, count);
        display
    }

    /// Identifier of the item this display summarises.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// The five icons derived from the average.
    #[must_use]
    pub const fn icons(&self) -> &[DisplayIcon; STAR_COUNT] {
        &self.icons
    }

    /// Average text, e.g. `4.5`.
    #[must_use]
    pub fn average_text(&self) -> &str {
        &self.average_text
    }

    /// Count text, e.g. `(2 ratings)`.
    #[must_use]
    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    /// Recomputes icons and labels from a new aggregate.
    pub fn apply_summary(&mut self, average: &Average, count: u64) {
        self.icons = rating::display_icons(average.value());
        average.text().clone_into(&mut self.average_text);
        self.count_text = rating::count_label(count);
    }
}

/// Every container and display discovered on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Optional page title shown in the header.
    pub title: Option<String>,
    /// Rating containers in document order.
    pub containers: Vec<RatingContainer>,
    /// Aggregate displays in document order.
    pub displays: Vec<RatingDisplay>,
}

#[cfg(test)]
mod tests;
