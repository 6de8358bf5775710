//! TUI mode for rating the items on a page.
//!
//! This module provides the entry point for the interactive terminal user
//! interface. The page, gateway, and telemetry sink are stored in
//! module-level storage for `RatingApp::init()` to pick up.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;

use starboard::telemetry::TracingTelemetrySink;
use starboard::tui::{
    RatingApp, set_gateway, set_initial_page, set_initial_terminal_size, set_telemetry_sink,
};
use starboard::{HttpRatingGateway, Page, RatingError, StarboardConfig};

/// Runs the TUI for a discovered page.
///
/// # Errors
///
/// Returns an error if:
/// - The base URL is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &StarboardConfig, page: Page) -> Result<(), RatingError> {
    let gateway = HttpRatingGateway::new(config.resolve_base_url()?, config.request_timeout())?;

    // Each setter is a no-op when the value is already present, which only
    // happens if the TUI is started twice in one process.
    let _ = set_initial_page(page);
    let _ = set_gateway(Arc::new(gateway));
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));
    if let Ok((width, height)) = terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| RatingError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `RatingApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<RatingApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
