//! Rating submission: request building, the gateway seam, and response
//! decoding.
//!
//! The widget reducer produces a [`SubmissionRequest`] when a form is
//! submitted; a [`RatingGateway`] turns it into a [`SubmissionResult`] or a
//! [`RatingError`]. The trait keeps the reducer and TUI independent of HTTP
//! so tests can substitute a mock.

mod client;

pub use self::client::{HttpRatingGateway, REQUESTED_WITH, resolve_action};

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::RatingError;
use crate::page::manifest::AttrValue;
use crate::page::{FormSpec, ItemId};
use crate::rating::{Average, RatingValue};

/// Form submission produced by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Item being rated.
    pub item_id: ItemId,
    /// Committed rating.
    pub rating: RatingValue,
    /// Form action, possibly relative.
    pub action: String,
    /// Form fields in submission order.
    pub fields: Vec<(String, String)>,
}

impl SubmissionRequest {
    /// Builds a request carrying the form's extra fields followed by the
    /// item identifier and the rating.
    #[must_use]
    pub fn from_form(item_id: &ItemId, rating: RatingValue, form: &FormSpec) -> Self {
        let mut fields = form.extra_fields.clone();
        fields.push((form.item_field.clone(), item_id.as_str().to_owned()));
        fields.push((form.rating_field.clone(), rating.to_string()));
        Self {
            item_id: item_id.clone(),
            rating,
            action: form.action.clone(),
            fields,
        }
    }
}

/// Aggregate returned by the server after a rating is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    /// Item whose displays should be patched.
    pub item_id: ItemId,
    /// New average rating.
    pub average: Average,
    /// New number of ratings.
    pub count: u64,
}

/// Gateway that delivers rating submissions to a server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingGateway: Send + Sync {
    /// Submits one rating and returns the server's aggregate.
    async fn submit(&self, request: &SubmissionRequest)
    -> Result<SubmissionResult, RatingError>;
}

#[derive(Debug, Deserialize)]
struct RatingResponse {
    #[serde(default)]
    item_id: Option<AttrValue>,
    #[serde(default)]
    movie_id: Option<AttrValue>,
    average_rating: AttrValue,
    rating_count: u64,
}

/// Decodes a successful response body.
///
/// Accepts `item_id` or `movie_id` (string or number; `item_id` wins when
/// both are present), an `average_rating` written as a number or numeric
/// string, and a non-negative `rating_count`.
///
/// # Errors
///
/// Returns [`RatingError::MalformedResponse`] when the body does not match.
pub fn decode_response(body: &str) -> Result<SubmissionResult, RatingError> {
    let response: RatingResponse =
        serde_json::from_str(body).map_err(|error| RatingError::MalformedResponse {
            message: error.to_string(),
        })?;

    let item_id = response
        .item_id
        .as_ref()
        .or(response.movie_id.as_ref())
        .ok_or_else(|| RatingError::MalformedResponse {
            message: "response carries neither item_id nor movie_id".to_owned(),
        })?
        .to_text();

    let average =
        response
            .average_rating
            .to_average()
            .ok_or_else(|| RatingError::MalformedResponse {
                message: format!(
                    "average_rating '{}' is not a number",
                    response.average_rating.to_text()
                ),
            })?;

    Ok(SubmissionResult {
        item_id: ItemId::new(item_id),
        average,
        count: response.rating_count,
    })
}
