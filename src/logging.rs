//! `tracing` subscriber initialisation.
//!
//! The terminal UI draws on the alternate screen, so log lines written to
//! stderr would corrupt it. Interactive runs therefore log to a file (or not
//! at all); the `--no-tui` pass may log to stderr.

use std::sync::Mutex;

use camino::Utf8PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::RatingError;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file, creating it if needed.
    File(Utf8PathBuf),
    /// Write to stderr.
    Stderr,
    /// Install no subscriber.
    Disabled,
}

impl LogTarget {
    /// Chooses a target from the configured log file and run mode.
    #[must_use]
    pub fn select(log_file: Option<Utf8PathBuf>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if interactive => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

/// Builds the filter: `RUST_LOG` when set, otherwise `directive`.
///
/// # Errors
///
/// Returns [`RatingError::Configuration`] when `directive` does not parse.
pub fn build_filter(directive: &str) -> Result<EnvFilter, RatingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|error| RatingError::Configuration {
        message: format!("invalid log level '{directive}': {error}"),
    })
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`RatingError::Configuration`] for a bad filter or when a
/// subscriber is already installed, and [`RatingError::Io`] when the log
/// file cannot be opened.
pub fn init(directive: &str, target: LogTarget) -> Result<(), RatingError> {
    let filter = build_filter(directive)?;
    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init(),
        LogTarget::File(path) => {
            let file = crate::files::open_append(&path)?.into_std();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .compact(),
                )
                .try_init()
        }
    };
    installed.map_err(|error| RatingError::Configuration {
        message: format!("failed to install logger: {error}"),
    })
}
