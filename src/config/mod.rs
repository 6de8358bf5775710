//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.starboard.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STARBOARD_PAGE`, `STARBOARD_BASE_URL`, …
//! 4. **Command-line arguments** – `--page`/`-p`, `--base-url`/`-b`, …
//!
//! # Configuration File
//!
//! ```toml
//! page = "pages/movies.json"
//! base_url = "http://localhost:8000/"
//! timeout_secs = 5
//! log_file = "starboard.log"
//! log_level = "starboard=debug"
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RatingError;

/// Default HTTP timeout for rating submissions, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default `EnvFilter` directive.
pub const DEFAULT_LOG_LEVEL: &str = "starboard=info";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use starboard::StarboardConfig;
///
/// let config = StarboardConfig::load().expect("failed to load configuration");
/// let page = config.require_page().expect("page manifest required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STARBOARD",
    discovery(
        dotfile_name = ".starboard.toml",
        config_file_name = "starboard.toml",
        app_name = "starboard"
    )
)]
pub struct StarboardConfig {
    /// Path to the page manifest.
    ///
    /// Can be provided via:
    /// - CLI: `--page <PATH>` or `-p <PATH>`
    /// - Environment: `STARBOARD_PAGE`
    /// - Config file: `page = "..."`
    #[ortho_config(cli_short = 'p')]
    pub page: Option<String>,

    /// Base URL that relative form actions are resolved against.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `STARBOARD_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: Option<String>,

    /// HTTP timeout for rating submissions, in seconds. Defaults to 10.
    #[ortho_config()]
    pub timeout_secs: u64,

    /// File receiving log output.
    ///
    /// The terminal UI owns stdout and stderr, so logging is only written
    /// when a log file is configured or `--no-tui` is used.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive, e.g. `starboard=debug`.
    #[ortho_config()]
    pub log_level: String,

    /// Prints the initial render of the page and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--no-tui` / `-n`
    /// - Config file: `no_tui = true`
    ///
    /// Note: `STARBOARD_NO_TUI` is not supported because `ortho_config` does
    /// not load boolean values from the environment.
    #[ortho_config(cli_short = 'n')]
    pub no_tui: bool,
}

impl Default for StarboardConfig {
    fn default() -> Self {
        Self {
            page: None,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            no_tui: false,
        }
    }
}

impl StarboardConfig {
    /// Returns the page manifest path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MissingPage`] when no path is configured.
    pub fn require_page(&self) -> Result<Utf8PathBuf, RatingError> {
        self.page
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(Utf8PathBuf::from)
            .ok_or(RatingError::MissingPage)
    }

    /// HTTP timeout for submissions. A zero value falls back to the default.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidUrl`] when the value is not an absolute
    /// URL.
    pub fn resolve_base_url(&self) -> Result<Option<Url>, RatingError> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                Url::parse(raw)
                    .map_err(|error| RatingError::InvalidUrl(format!("{raw}: {error}")))
            })
            .transpose()
    }

    /// Log file path, if configured.
    #[must_use]
    pub fn log_path(&self) -> Option<Utf8PathBuf> {
        self.log_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(Utf8PathBuf::from)
    }
}

#[cfg(test)]
mod tests;
