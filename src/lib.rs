//! Starboard library crate providing interactive star-rating widgets.
//!
//! A page manifest describes rating containers (five stars, a hidden value,
//! an optional form, a submit control and a feedback region) and aggregate
//! displays. The library discovers those elements, drives each container
//! through its hover, click and submit states, posts ratings to a server,
//! and patches every display of the rated item with the returned average.

pub mod config;
pub mod error;
mod files;
pub mod logging;
pub mod page;
pub mod rating;
pub mod submit;
pub mod telemetry;
pub mod tui;
pub mod widget;

pub use config::StarboardConfig;
pub use error::RatingError;
pub use page::{Discovery, ItemId, Page, RatingContainer, RatingDisplay};
pub use rating::{Average, RatingValue};
pub use submit::{HttpRatingGateway, RatingGateway, SubmissionRequest, SubmissionResult};
pub use widget::{Effect, RatingWidget, Registration, WidgetEvent, WidgetRegistry};
