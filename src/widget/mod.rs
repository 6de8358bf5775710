//! Rating widget reducer.
//!
//! Each rating container is driven by a [`RatingWidget`]. User interaction
//! arrives as [`WidgetEvent`]s; the widget mutates its container and answers
//! with [`Effect`]s for the work it cannot do synchronously (timers and the
//! network round trip). The TUI, or a test, performs the effects and feeds
//! their outcome back as further events.
//!
//! # State machine
//!
//! A container is either `Unselected` (pending value 0) or `Selected(n)`.
//! Activating star `n` always moves to `Selected(n)`; hovering only changes
//! the transient highlight.
//!
//! # Timers
//!
//! The 280 ms "selected" pulse and the 1500 ms success message are modelled
//! as effects carrying a generation number. A newer pulse or feedback bumps
//! the generation, so an expiry from a superseded timer is ignored rather
//! than clobbering newer state.

use std::time::Duration;

use crate::error::RatingError;
use crate::page::{FeedbackTone, RatingContainer};
use crate::rating::RatingValue;
use crate::submit::{SubmissionRequest, SubmissionResult};

mod board;
mod registry;

pub use board::DisplayBoard;
pub use registry::{Registration, WidgetRegistry};

/// How long the "selected" pulse stays on an activated star.
pub const PULSE_DURATION: Duration = Duration::from_millis(280);

/// How long the success message stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Feedback text shown after a successful submission.
pub const SAVED_FEEDBACK: &str = "Saved";

/// Committed state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No rating chosen yet.
    Unselected,
    /// A rating has been chosen.
    Selected(RatingValue),
}

/// Interaction delivered to a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The pointer (or keyboard focus) entered a star.
    HoverEnter {
        /// 1-based star position.
        position: u8,
    },
    /// The pointer left the star row.
    HoverLeave,
    /// A star was clicked.
    Activate {
        /// 1-based star position.
        position: u8,
    },
    /// The rating form was submitted.
    Submit,
    /// The submission round trip finished.
    SubmissionFinished(Result<SubmissionResult, RatingError>),
    /// A pulse timer fired.
    PulseExpired {
        /// Star the pulse was applied to.
        position: u8,
        /// Generation the timer was armed with.
        generation: u64,
    },
    /// A feedback auto-hide timer fired.
    FeedbackExpired {
        /// Generation the timer was armed with.
        generation: u64,
    },
}

/// Work requested by a widget in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver [`WidgetEvent::PulseExpired`] after `delay`.
    ClearPulseAfter {
        /// Star to clear.
        position: u8,
        /// Generation to echo back.
        generation: u64,
        /// Delay before the event.
        delay: Duration,
    },
    /// Deliver [`WidgetEvent::FeedbackExpired`] after `delay`.
    HideFeedbackAfter {
        /// Generation to echo back.
        generation: u64,
        /// Delay before the event.
        delay: Duration,
    },
    /// Send the submission and deliver [`WidgetEvent::SubmissionFinished`].
    Send(SubmissionRequest),
    /// Patch every display of the result's item.
    Publish(SubmissionResult),
}

/// Busy state held while a submission is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BusyScope {
    original_label: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TimerGenerations {
    pulse: u64,
    feedback: u64,
}

/// Reducer for a single rating container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingWidget {
    container: RatingContainer,
    hovered: Option<u8>,
    busy: Option<BusyScope>,
    timers: TimerGenerations,
}

impl RatingWidget {
    /// Wraps a container and renders its initial highlight from the hidden
    /// field, so a pre-populated value shows before any interaction.
    #[must_use]
    pub fn new(mut container: RatingContainer) -> Self {
        container.highlight(i64::from(container.pending()));
        Self {
            container,
            hovered: None,
            busy: None,
            timers: TimerGenerations::default(),
        }
    }

    /// The container in its current visual state.
    #[must_use]
    pub const fn container(&self) -> &RatingContainer {
        &self.container
    }

    /// Committed selection derived from the hidden field.
    #[must_use]
    pub fn selection(&self) -> Selection {
        RatingValue::new(self.container.pending())
            .map_or(Selection::Unselected, Selection::Selected)
    }

    /// Star currently previewed, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<u8> {
        self.hovered
    }

    /// Whether a submission is outstanding.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.busy.is_some()
    }

    /// Applies one event and returns the effects it requests.
    pub fn handle(&mut self, event: WidgetEvent) -> Vec<Effect> {
        match event {
            WidgetEvent::HoverEnter { position } => {
                self.hover_enter(position);
                Vec::new()
            }
            WidgetEvent::HoverLeave => {
                self.hover_leave();
                Vec::new()
            }
            WidgetEvent::Activate { position } => self.activate(position),
            WidgetEvent::Submit => self.submit(),
            WidgetEvent::SubmissionFinished(outcome) => self.finish_submission(outcome),
            WidgetEvent::PulseExpired {
                position,
                generation,
            } => {
                self.expire_pulse(position, generation);
                Vec::new()
            }
            WidgetEvent::FeedbackExpired { generation } => {
                self.expire_feedback(generation);
                Vec::new()
            }
        }
    }

    fn hover_enter(&mut self, position: u8) {
        self.hovered = Some(position);
        self.container.highlight(i64::from(position));
    }

    fn hover_leave(&mut self) {
        self.hovered = None;
        self.container.highlight(i64::from(self.container.pending()));
    }

    fn activate(&mut self, position: u8) -> Vec<Effect> {
        let Some(rating) = RatingValue::new(position) else {
            tracing::warn!(
                item_id = %self.container.item_id(),
                position,
                "ignoring activation of unknown star"
            );
            return Vec::new();
        };

        self.container.set_hidden_value(rating.get());
        self.container.highlight(i64::from(rating.get()));
        if let Some(submit) = self.container.submit_mut() {
            submit.reveal();
        }

        self.container.clear_pulses();
        self.timers.pulse = self.timers.pulse.wrapping_add(1);
        if let Some(star) = self.container.star_mut(position) {
            star.set_pulsing(true);
        }

        tracing::debug!(
            item_id = %self.container.item_id(),
            rating = rating.get(),
            "rating selected"
        );
        vec![Effect::ClearPulseAfter {
            position,
            generation: self.timers.pulse,
            delay: PULSE_DURATION,
        }]
    }

    fn expire_pulse(&mut self, position: u8, generation: u64) {
        if generation != self.timers.pulse {
            return;
        }
        if let Some(star) = self.container.star_mut(position) {
            star.set_pulsing(false);
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        let Some(form) = self.container.form() else {
            return Vec::new();
        };
        if self
            .container
            .submit()
            .is_some_and(crate::page::SubmitControl::is_disabled)
        {
            tracing::debug!(item_id = %self.container.item_id(), "submit control is disabled");
            return Vec::new();
        }
        let Some(rating) = RatingValue::new(self.container.pending()) else {
            return Vec::new();
        };

        let request = SubmissionRequest::from_form(self.container.item_id(), rating, form);
        let original_label = self.container.submit_mut().map(|submit| submit.enter_busy());
        self.busy = Some(BusyScope { original_label });

        tracing::info!(item_id = %request.item_id, rating = rating.get(), "submitting rating");
        vec![Effect::Send(request)]
    }

    fn release_busy(&mut self) {
        let Some(scope) = self.busy.take() else {
            return;
        };
        if let (Some(label), Some(submit)) = (scope.original_label, self.container.submit_mut()) {
            submit.leave_busy(label);
        }
    }

    fn finish_submission(&mut self, outcome: Result<SubmissionResult, RatingError>) -> Vec<Effect> {
        self.release_busy();
        self.timers.feedback = self.timers.feedback.wrapping_add(1);
        let generation = self.timers.feedback;

        match outcome {
            Ok(result) => {
                let mut effects = Vec::with_capacity(2);
                if let Some(feedback) = self.container.feedback_mut() {
                    feedback.show(FeedbackTone::Success, SAVED_FEEDBACK);
                    effects.push(Effect::HideFeedbackAfter {
                        generation,
                        delay: FEEDBACK_DURATION,
                    });
                }
                effects.push(Effect::Publish(result));
                effects
            }
            Err(error) => {
                tracing::warn!(
                    item_id = %self.container.item_id(),
                    %error,
                    "rating submission failed"
                );
                if let Some(feedback) = self.container.feedback_mut() {
                    feedback.show(FeedbackTone::Error, error.feedback_text());
                }
                Vec::new()
            }
        }
    }

    fn expire_feedback(&mut self, generation: u64) {
        if generation != self.timers.feedback {
            return;
        }
        if let Some(feedback) = self.container.feedback_mut() {
            feedback.hide();
        }
    }
}
