//! Application telemetry events and sinks.
//!
//! Submissions are timed and recorded as structured events so that slow or
//! failing rating endpoints show up in the log without instrumenting the
//! widget itself.

use serde::{Deserialize, Serialize};

use crate::error::RatingError;

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The server saved the rating.
    Saved,
    /// The server answered with a non-success status.
    Rejected,
    /// The request failed or the reply could not be decoded.
    Failed,
}

impl SubmissionOutcome {
    /// Classifies a submission result.
    #[must_use]
    pub const fn of<T>(result: &Result<T, RatingError>) -> Self {
        match result {
            Ok(_) => Self::Saved,
            Err(RatingError::Rejected { .. }) => Self::Rejected,
            Err(_) => Self::Failed,
        }
    }
}

/// A structured telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a completed rating submission.
    RatingSubmitted {
        /// Item that was rated.
        item_id: String,
        /// Rating that was sent.
        rating: u8,
        /// Round-trip duration in milliseconds.
        latency_ms: u64,
        /// How the submission ended.
        outcome: SubmissionOutcome,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Writes telemetry events to the `tracing` log as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };
        tracing::info!(target: "starboard::telemetry", event = %serialised, "telemetry");
    }
}

/// Test helpers for capturing telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        ///
        /// # Panics
        ///
        /// Panics if the events mutex is poisoned.
        #[expect(clippy::expect_used, reason = "test helper; poisoning is a bug")]
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .clone()
        }

        /// Returns the recorded events, leaving the sink empty.
        ///
        /// # Panics
        ///
        /// Panics if the events mutex is poisoned.
        #[expect(clippy::expect_used, reason = "test helper; poisoning is a bug")]
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        #[expect(clippy::expect_used, reason = "test helper; poisoning is a bug")]
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::test_support::RecordingTelemetrySink;
    use super::{SubmissionOutcome, TelemetryEvent, TelemetrySink};
    use crate::error::RatingError;

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        let event = TelemetryEvent::RatingSubmitted {
            item_id: "7".to_owned(),
            rating: 4,
            latency_ms: 12,
            outcome: SubmissionOutcome::Saved,
        };
        sink.record(event.clone());

        assert_eq!(sink.take(), vec![event]);
        assert!(sink.take().is_empty(), "take drains the sink");
    }

    #[rstest]
    #[case::saved(Ok(()), SubmissionOutcome::Saved)]
    #[case::rejected(Err(RatingError::Rejected { status: 403 }), SubmissionOutcome::Rejected)]
    #[case::network(
        Err(RatingError::Network { message: "refused".to_owned() }),
        SubmissionOutcome::Failed
    )]
    fn outcome_classifies_results(
        #[case] result: Result<(), RatingError>,
        #[case] expected: SubmissionOutcome,
    ) {
        assert_eq!(SubmissionOutcome::of(&result), expected);
    }

    #[test]
    fn events_serialise_with_type_tag() {
        let event = TelemetryEvent::RatingSubmitted {
            item_id: "7".to_owned(),
            rating: 5,
            latency_ms: 40,
            outcome: SubmissionOutcome::Rejected,
        };

        let json = serde_json::to_value(&event).expect("serialise event");

        assert_eq!(
            json,
            serde_json::json!({
                "type": "rating_submitted",
                "item_id": "7",
                "rating": 5,
                "latency_ms": 40,
                "outcome": "rejected"
            })
        );
    }
}
