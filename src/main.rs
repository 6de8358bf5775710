//! Starboard CLI entrypoint.
//!
//! Loads a page manifest and either runs the interactive rating TUI or,
//! with `--no-tui`, prints a plain-text snapshot of the page.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use starboard::logging::{self, LogTarget};
use starboard::{Page, RatingError, StarboardConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RatingError> {
    let config = load_config()?;
    logging::init(
        &config.log_level,
        LogTarget::select(config.log_path(), !config.no_tui),
    )?;

    let discovery = Page::load(&config.require_page()?)?;
    if !discovery.skipped.is_empty() {
        tracing::info!(
            skipped = discovery.skipped.len(),
            "some rating containers were skipped"
        );
    }

    if config.no_tui {
        return cli::snapshot::write_snapshot(&discovery.page);
    }
    cli::rating_tui::run(&config, discovery.page).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`RatingError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StarboardConfig, RatingError> {
    StarboardConfig::load().map_err(|error| RatingError::Configuration {
        message: error.to_string(),
    })
}
