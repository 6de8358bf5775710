//! JSON page manifests and container discovery.
//!
//! A manifest lists page elements tagged by `kind`. Elements of kind
//! `star-rating-input` become [`RatingContainer`]s, elements of kind
//! `star-rating-display` become [`RatingDisplay`]s, and anything else is
//! ignored the way unrelated markup would be.
//!
//! ```json
//! {
//!   "title": "Movies Store",
//!   "elements": [
//!     {
//!       "kind": "star-rating-input",
//!       "item_id": "7",
//!       "hidden_value": "3",
//!       "stars": [{"rating": 1}, {"rating": 2}, {"rating": 3}, {"rating": 4}, {"rating": 5}],
//!       "form": {"action": "/movies/7/rate/", "fields": {"csrfmiddlewaretoken": "abc"}},
//!       "submit": {"label": "Submit rating"},
//!       "feedback": true
//!     },
//!     {"kind": "star-rating-display", "item_id": "7", "average": 4.5, "count": 2}
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::Deserialize;

use super::{
    DEFAULT_SUBMIT_LABEL, FormSpec, ItemId, Page, RatingContainer, RatingDisplay, SubmitControl,
};
use crate::error::RatingError;
use crate::rating::{Average, STAR_COUNT};

/// Decoded page manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageManifest {
    /// Optional page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Raw page elements in document order, decoded one at a time by
    /// [`PageManifest::discover`].
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
}

/// A tagged page element.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ManifestElement {
    /// An interactive rating container.
    StarRatingInput(InputSpec),
    /// An aggregate rating display.
    StarRatingDisplay(DisplaySpec),
    /// Any element the widget does not recognise.
    #[serde(other)]
    Unrecognised,
}

/// Attribute value that may be written as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Numeric attribute.
    Number(serde_json::Number),
    /// Text attribute.
    Text(String),
}

impl AttrValue {
    /// Returns the attribute as text, the way a data attribute reads.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Interprets the attribute as an average rating.
    #[must_use]
    pub fn to_average(&self) -> Option<Average> {
        match self {
            Self::Number(number) => number.as_f64().map(Average::from_value),
            Self::Text(text) => Average::parse(text),
        }
    }
}

/// Manifest description of a rating container.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSpec {
    /// Item identifier (`data-movie-id` in the source markup).
    pub item_id: AttrValue,
    /// Pre-populated hidden field value.
    #[serde(default)]
    pub hidden_value: Option<AttrValue>,
    /// Star controls in document order.
    #[serde(default)]
    pub stars: Vec<StarSpec>,
    /// Rating form, if the container can submit.
    #[serde(default)]
    pub form: Option<FormManifest>,
    /// Submit control, if present.
    #[serde(default)]
    pub submit: Option<SubmitSpec>,
    /// Whether the container has a feedback region.
    #[serde(default)]
    pub feedback: bool,
}

/// Manifest description of one star control.
#[derive(Debug, Clone, Deserialize)]
pub struct StarSpec {
    /// The star's own rating attribute.
    pub rating: AttrValue,
}

/// Manifest description of a rating form.
#[derive(Debug, Clone, Deserialize)]
pub struct FormManifest {
    /// Form target URL.
    pub action: String,
    /// Field name carrying the item identifier.
    #[serde(default = "default_item_field")]
    pub item_field: String,
    /// Field name carrying the rating.
    #[serde(default = "default_rating_field")]
    pub rating_field: String,
    /// Extra hidden fields.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// Manifest description of a submit control.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitSpec {
    /// Button label.
    #[serde(default = "default_submit_label")]
    pub label: String,
    /// Whether the button starts revealed.
    #[serde(default)]
    pub visible: bool,
}

/// Manifest description of an aggregate display.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySpec {
    /// Item identifier.
    pub item_id: AttrValue,
    /// Initial average; absent means no ratings yet.
    #[serde(default)]
    pub average: Option<AttrValue>,
    /// Initial rating count.
    #[serde(default)]
    pub count: u64,
}

fn default_item_field() -> String {
    "item_id".to_owned()
}

fn default_rating_field() -> String {
    "rating".to_owned()
}

fn default_submit_label() -> String {
    DEFAULT_SUBMIT_LABEL.to_owned()
}

/// A container that did not satisfy the discovery contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedContainer {
    /// Identifier of the skipped container, as written.
    pub item_id: String,
    /// Why the container was skipped.
    pub reason: String,
}

/// Result of discovering containers on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// The accepted page elements.
    pub page: Page,
    /// Containers rejected by the discovery contract.
    pub skipped: Vec<SkippedContainer>,
}

impl PageManifest {
    /// Decodes a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidManifest`] when the text is not a valid
    /// manifest.
    pub fn from_json(text: &str) -> Result<Self, RatingError> {
        serde_json::from_str(text).map_err(|error| RatingError::InvalidManifest {
            message: error.to_string(),
        })
    }

    /// Splits the manifest into containers and displays.
    ///
    /// Containers that break the contract (fields of the wrong type, not
    /// exactly five stars, a star whose rating differs from its position,
    /// an empty identifier) are skipped with a warning; the rest of the
    /// page still loads.
    #[must_use]
    pub fn discover(self) -> Discovery {
        let mut discovery = Discovery {
            page: Page {
                title: self.title,
                ..Page::default()
            },
            skipped: Vec::new(),
        };

        for value in self.elements {
            let element = match serde_json::from_value::<ManifestElement>(value.clone()) {
                Ok(element) => element,
                Err(error) => {
                    if let Some(skipped) = undecodable_container(&value, &error) {
                        discovery.skip(skipped);
                    } else {
                        tracing::warn!(%error, "ignoring undecodable page element");
                    }
                    continue;
                }
            };
            match element {
                ManifestElement::StarRatingInput(spec) => match build_container(spec) {
                    Ok(container) => discovery.page.containers.push(container),
                    Err(skipped) => discovery.skip(skipped),
                },
                ManifestElement::StarRatingDisplay(spec) => {
                    discovery.page.displays.push(build_display(&spec));
                }
                ManifestElement::Unrecognised => {}
            }
        }

        tracing::debug!(
            containers = discovery.page.containers.len(),
            displays = discovery.page.displays.len(),
            skipped = discovery.skipped.len(),
            "page discovered"
        );
        discovery
    }
}

impl Discovery {
    fn skip(&mut self, skipped: SkippedContainer) {
        tracing::warn!(
            item_id = %skipped.item_id,
            reason = %skipped.reason,
            "skipping rating container"
        );
        self.skipped.push(skipped);
    }
}

/// Reports a rating container whose fields have the wrong shape.
///
/// Returns `None` for elements of any other kind.
fn undecodable_container(
    value: &serde_json::Value,
    error: &serde_json::Error,
) -> Option<SkippedContainer> {
    if value.get("kind").and_then(serde_json::Value::as_str) != Some("star-rating-input") {
        return None;
    }
    let item_id = value.get("item_id").map_or_else(String::new, |id| {
        id.as_str().map_or_else(|| id.to_string(), str::to_owned)
    });
    Some(SkippedContainer {
        item_id,
        reason: format!("container could not be decoded: {error}"),
    })
}

impl Page {
    /// Loads and discovers a page manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Io`] when the file cannot be read, or
    /// [`RatingError::InvalidManifest`] when it cannot be decoded.
    pub fn load(path: &Utf8Path) -> Result<Discovery, RatingError> {
        let text = crate::files::read_to_string(path)?;
        Ok(PageManifest::from_json(&text)?.discover())
    }
}

fn build_container(spec: InputSpec) -> Result<RatingContainer, SkippedContainer> {
    let item_text = spec.item_id.to_text();
    let skip = |reason: String| SkippedContainer {
        item_id: item_text.clone(),
        reason,
    };

    if item_text.trim().is_empty() {
        return Err(skip("item identifier is empty".to_owned()));
    }
    if spec.stars.len() != STAR_COUNT {
        return Err(skip(format!(
            "expected {STAR_COUNT} star controls, found {}",
            spec.stars.len()
        )));
    }
    for (position, star) in (1_usize..).zip(&spec.stars) {
        let rating = star.rating.to_text();
        if rating.trim() != position.to_string() {
            return Err(skip(format!("star {position} carries rating '{rating}'")));
        }
    }

    let mut container = RatingContainer::new(ItemId::new(item_text.clone()));
    if let Some(hidden) = spec.hidden_value {
        container = container.with_hidden_value(hidden.to_text());
    }
    if let Some(form) = spec.form {
        container = container.with_form(FormSpec {
            action: form.action,
            item_field: form.item_field,
            rating_field: form.rating_field,
            extra_fields: form.fields.into_iter().collect(),
        });
    }
    if let Some(submit) = spec.submit {
        let control = SubmitControl::new(submit.label);
        container = container.with_submit(if submit.visible {
            control.shown()
        } else {
            control
        });
    }
    if spec.feedback {
        container = container.with_feedback();
    }
    Ok(container)
}

fn build_display(spec: &DisplaySpec) -> RatingDisplay {
    let average = spec
        .average
        .as_ref()
        .and_then(AttrValue::to_average)
        .unwrap_or_else(|| Average::from_value(0.0));
    RatingDisplay::new(ItemId::new(spec.item_id.to_text()), &average, spec.count)
}
