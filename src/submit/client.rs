//! `reqwest` implementation of [`RatingGateway`].

use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, HeaderName};
use url::Url;

use super::{RatingGateway, SubmissionRequest, SubmissionResult, decode_response};
use crate::error::RatingError;

/// Value of the `X-Requested-With` header that marks a background request.
pub const REQUESTED_WITH: &str = "XMLHttpRequest";

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Gateway that posts rating forms over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRatingGateway {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpRatingGateway {
    /// Creates a gateway with the given base URL for relative form actions.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(base_url: Option<Url>, timeout: Duration) -> Result<Self, RatingError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| RatingError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, base_url })
    }
}

/// Resolves a form action against an optional base URL.
///
/// Absolute actions are used as-is; relative ones require a base.
///
/// # Errors
///
/// Returns [`RatingError::InvalidUrl`] when the action cannot be parsed or is
/// relative without a base.
pub fn resolve_action(base_url: Option<&Url>, action: &str) -> Result<Url, RatingError> {
    match Url::parse(action) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base_url
            .ok_or_else(|| {
                RatingError::InvalidUrl(format!(
                    "form action '{action}' is relative and no base URL is configured"
                ))
            })?
            .join(action)
            .map_err(|error| RatingError::InvalidUrl(format!("{action}: {error}"))),
        Err(error) => Err(RatingError::InvalidUrl(format!("{action}: {error}"))),
    }
}

#[async_trait]
impl RatingGateway for HttpRatingGateway {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResult, RatingError> {
        let url = resolve_action(self.base_url.as_ref(), &request.action)?;
        tracing::debug!(%url, item_id = %request.item_id, "posting rating");

        let response = self
            .client
            .post(url)
            .header(X_REQUESTED_WITH, REQUESTED_WITH)
            .header(ACCEPT, "application/json")
            .form(&request.fields)
            .send()
            .await
            .map_err(|error| RatingError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatingError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| RatingError::Network {
                message: format!("failed to read response body: {error}"),
            })?;
        decode_response(&body)
    }
}
