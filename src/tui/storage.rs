//! Startup context storage for the rating TUI.
//!
//! This module owns the global `OnceLock` values used during TUI
//! bootstrapping and provides the setter/getter functions consumed by the
//! CLI wiring and `RatingApp::init()`.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::page::Page;
use crate::submit::RatingGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the discovered page.
///
/// This is set before the TUI program starts and read by `RatingApp::init()`.
static INITIAL_PAGE: OnceLock<Page> = OnceLock::new();

/// Global storage for initial terminal dimensions.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the gateway that delivers submissions.
static GATEWAY: OnceLock<Arc<dyn RatingGateway>> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the page the TUI renders.
///
/// # Returns
///
/// `true` if the page was set, `false` if it was already set.
pub fn set_initial_page(page: Page) -> bool {
    INITIAL_PAGE.set(page).is_ok()
}

/// Sets the initial terminal dimensions so the first frame uses the real
/// terminal size.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the gateway used for rating submissions.
///
/// Without a gateway every submission fails with a configuration error,
/// which the widget reports as a network error.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_gateway(gateway: Arc<dyn RatingGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Sets the telemetry sink. Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial page, or an empty page if not set.
pub(crate) fn get_initial_page() -> Page {
    INITIAL_PAGE.get().cloned().unwrap_or_default()
}

/// Gets the configured gateway, if any.
pub(crate) fn get_gateway() -> Option<Arc<dyn RatingGateway>> {
    GATEWAY.get().cloned()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Gets the initial terminal dimensions, falling back to the live terminal
/// size and then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::telemetry::test_support::RecordingTelemetrySink;
    use crate::telemetry::{SubmissionOutcome, TelemetryEvent};

    #[test]
    fn get_telemetry_sink_returns_usable_sink() {
        // OnceLock may hold Noop or a previously-set sink; verify no panic.
        get_telemetry_sink().record(TelemetryEvent::RatingSubmitted {
            item_id: "7".to_owned(),
            rating: 3,
            latency_ms: 1,
            outcome: SubmissionOutcome::Saved,
        });
    }

    #[test]
    fn set_telemetry_sink_wires_recording_sink() {
        let sink = Arc::new(RecordingTelemetrySink::default());
        let was_set = set_telemetry_sink(Arc::clone(&sink) as Arc<dyn TelemetrySink>);
        get_telemetry_sink().record(TelemetryEvent::RatingSubmitted {
            item_id: "9".to_owned(),
            rating: 5,
            latency_ms: 20,
            outcome: SubmissionOutcome::Rejected,
        });
        if was_set {
            assert_eq!(sink.events().len(), 1);
        }
    }

    #[test]
    fn initial_terminal_size_is_positive() {
        let (width, height) = get_initial_terminal_size();

        assert!(width > 0 && height > 0);
    }
}
