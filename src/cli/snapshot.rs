//! Plain-text page snapshot for non-interactive runs.
//!
//! Every container is wired exactly as in the TUI, so a pre-populated value
//! shows the same filled stars it would on screen.

use std::io::{self, Write};

use starboard::tui::components::{icon_row, star_row};
use starboard::{Page, RatingError, WidgetRegistry};

/// Writes a snapshot of the page to stdout.
///
/// # Errors
///
/// Returns [`RatingError::Io`] when stdout cannot be written.
pub fn write_snapshot(page: &Page) -> Result<(), RatingError> {
    let mut stdout = io::stdout().lock();
    write_snapshot_to(&mut stdout, page)
}

/// Writes a snapshot of the page to the given writer.
///
/// # Errors
///
/// Returns [`RatingError::Io`] when the writer fails.
pub fn write_snapshot_to<W: Write>(writer: &mut W, page: &Page) -> Result<(), RatingError> {
    let (registry, _) = WidgetRegistry::initialize(page.containers.clone(), page.displays.clone());

    if let Some(title) = &page.title {
        writeln!(writer, "{title}").map_err(|e| io_error(&e))?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }

    writeln!(writer, "Ratings:").map_err(|e| io_error(&e))?;
    for (_, widget) in registry.widgets() {
        let container = widget.container();
        let pending = container.pending();
        let state = if pending == 0 {
            "not rated".to_owned()
        } else {
            format!("rated {pending}")
        };
        writeln!(
            writer,
            "  Item {}  {}  ({state})",
            container.item_id(),
            star_row(container.stars())
        )
        .map_err(|e| io_error(&e))?;
    }

    let displays = registry.board().displays();
    if !displays.is_empty() {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "Averages:").map_err(|e| io_error(&e))?;
        for display in displays {
            writeln!(
                writer,
                "  Item {}  {} {} {}",
                display.item_id(),
                icon_row(display),
                display.average_text(),
                display.count_text()
            )
            .map_err(|e| io_error(&e))?;
        }
    }

    Ok(())
}

fn io_error(error: &io::Error) -> RatingError {
    RatingError::Io {
        message: error.to_string(),
    }
}
