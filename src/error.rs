//! Error types shared by page discovery, configuration, and submission.

use thiserror::Error;

/// Feedback text shown when the server rejects a submission.
pub const REJECTED_FEEDBACK: &str = "Error";

/// Feedback text shown when the submission never produced a usable reply.
pub const NETWORK_FEEDBACK: &str = "Network error";

/// Errors surfaced while loading a page or submitting a rating.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    /// No page manifest was configured.
    #[error("page manifest path is required (use --page or -p)")]
    MissingPage,

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("TUI error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },

    /// The page manifest could not be decoded.
    #[error("page manifest is invalid: {message}")]
    InvalidManifest {
        /// Decoder error detail.
        message: String,
    },

    /// A form action or base URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("server rejected the rating with status {status}")]
    Rejected {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The request failed before a response arrived.
    #[error("network error submitting rating: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered successfully but the body was not a rating payload.
    #[error("rating response could not be decoded: {message}")]
    MalformedResponse {
        /// Decoder error detail.
        message: String,
    },
}

impl RatingError {
    /// Returns the short message shown in a widget's feedback region.
    ///
    /// A body that cannot be decoded is reported like a transport failure;
    /// only an explicit non-success status counts as a rejection.
    #[must_use]
    pub const fn feedback_text(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => REJECTED_FEEDBACK,
            _ => NETWORK_FEEDBACK,
        }
    }
}
