//! Conversion of widget effects into bubbletea-rs commands.
//!
//! Timers become `tokio::time::sleep` commands that deliver the widget's
//! expiry event; submissions run the gateway, record telemetry, and deliver
//! `SubmissionFinished`. Every command resolves to an [`AppMsg::Widget`]
//! addressed to the registration that requested it.

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bubbletea_rs::Cmd;

use super::RatingApp;
use crate::error::RatingError;
use crate::submit::{RatingGateway, SubmissionRequest, SubmissionResult};
use crate::telemetry::{SubmissionOutcome, TelemetryEvent};
use crate::tui::messages::AppMsg;
use crate::widget::{Effect, Registration, WidgetEvent};

impl RatingApp {
    /// Converts a batch of effects into at most one command.
    pub(super) fn commands_for(
        &self,
        registration: Registration,
        effects: Vec<Effect>,
    ) -> Option<Cmd> {
        let mut commands: Vec<Cmd> = effects
            .into_iter()
            .filter_map(|effect| self.command_for(registration, effect))
            .collect();
        if commands.len() > 1 {
            return Some(bubbletea_rs::batch(commands));
        }
        commands.pop()
    }

    fn command_for(&self, registration: Registration, effect: Effect) -> Option<Cmd> {
        match effect {
            Effect::ClearPulseAfter {
                position,
                generation,
                delay,
            } => Some(Self::arm_widget_timer(
                registration,
                delay,
                WidgetEvent::PulseExpired {
                    position,
                    generation,
                },
            )),
            Effect::HideFeedbackAfter { generation, delay } => Some(Self::arm_widget_timer(
                registration,
                delay,
                WidgetEvent::FeedbackExpired { generation },
            )),
            Effect::Send(request) => Some(self.submission_cmd(registration, request)),
            // Applied to the display board by the registry.
            Effect::Publish(_) => None,
        }
    }

    /// Creates a command that delivers `event` to a widget after `delay`.
    pub(super) fn arm_widget_timer(
        registration: Registration,
        delay: Duration,
        event: WidgetEvent,
    ) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Some(Box::new(AppMsg::Widget {
                registration,
                event,
            }) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that submits a rating and reports the outcome.
    ///
    /// The command always resolves to `SubmissionFinished`, so the widget
    /// leaves its busy state whatever the transport does.
    pub(super) fn submission_cmd(
        &self,
        registration: Registration,
        request: SubmissionRequest,
    ) -> Cmd {
        let gateway = self.gateway.clone();
        let telemetry = Arc::clone(&self.telemetry);
        Box::pin(async move {
            let start = Instant::now();
            let result = deliver(gateway, &request).await;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Latency over u64::MAX milliseconds is unrealistic"
            )]
            let latency_ms = start.elapsed().as_millis() as u64;

            let outcome = SubmissionOutcome::of(&result);
            tracing::info!(
                item_id = %request.item_id,
                rating = request.rating.get(),
                latency_ms,
                ?outcome,
                "rating submission finished"
            );
            telemetry.record(TelemetryEvent::RatingSubmitted {
                item_id: request.item_id.to_string(),
                rating: request.rating.get(),
                latency_ms,
                outcome,
            });

            Some(Box::new(AppMsg::Widget {
                registration,
                event: WidgetEvent::SubmissionFinished(result),
            }) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}

async fn deliver(
    gateway: Option<Arc<dyn RatingGateway>>,
    request: &SubmissionRequest,
) -> Result<SubmissionResult, RatingError> {
    let Some(gateway) = gateway else {
        return Err(RatingError::Configuration {
            message: "no rating gateway configured".to_owned(),
        });
    };
    gateway.submit(request).await
}
