//! Page-wide widget registry.

use super::{DisplayBoard, Effect, RatingWidget, WidgetEvent};
use crate::page::{RatingContainer, RatingDisplay};

/// Handle to one initialised container.
///
/// Registrations stay valid until [`WidgetRegistry::dispose`] is called;
/// events addressed to a disposed registration are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Registration(usize);

/// Owns one [`RatingWidget`] per container plus the page's displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetRegistry {
    widgets: Vec<Option<RatingWidget>>,
    board: DisplayBoard,
}

impl WidgetRegistry {
    /// Wires every container and renders its pre-populated rating.
    ///
    /// Returns the registry together with one registration per container,
    /// in document order.
    #[must_use]
    pub fn initialize(
        containers: Vec<RatingContainer>,
        displays: Vec<RatingDisplay>,
    ) -> (Self, Vec<Registration>) {
        let widgets: Vec<_> = containers
            .into_iter()
            .map(|container| Some(RatingWidget::new(container)))
            .collect();
        let registrations = (0..widgets.len()).map(Registration).collect();
        tracing::debug!(containers = widgets.len(), "rating widgets initialised");
        (
            Self {
                widgets,
                board: DisplayBoard::new(displays),
            },
            registrations,
        )
    }

    /// Registrations that have not been disposed.
    #[must_use]
    pub fn registrations(&self) -> Vec<Registration> {
        self.widgets
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| Registration(index))
            .collect()
    }

    /// The widget behind a registration, if still live.
    #[must_use]
    pub fn widget(&self, registration: Registration) -> Option<&RatingWidget> {
        self.widgets.get(registration.0).and_then(Option::as_ref)
    }

    /// Live widgets with their registrations, in document order.
    pub fn widgets(&self) -> impl Iterator<Item = (Registration, &RatingWidget)> {
        self.widgets
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|widget| (Registration(index), widget)))
    }

    /// The page's aggregate displays.
    #[must_use]
    pub const fn board(&self) -> &DisplayBoard {
        &self.board
    }

    /// Routes an event to a widget.
    ///
    /// [`Effect::Publish`] is applied to the display board here; the
    /// remaining effects are returned for the caller to perform.
    pub fn dispatch(&mut self, registration: Registration, event: WidgetEvent) -> Vec<Effect> {
        let Some(widget) = self
            .widgets
            .get_mut(registration.0)
            .and_then(Option::as_mut)
        else {
            tracing::debug!(registration = registration.0, "event for disposed widget dropped");
            return Vec::new();
        };

        let mut pending = Vec::new();
        for effect in widget.handle(event) {
            match effect {
                Effect::Publish(result) => {
                    self.board.publish(&result);
                }
                other => pending.push(other),
            }
        }
        pending
    }

    /// Detaches a widget. Returns `false` if it was already disposed.
    pub fn dispose(&mut self, registration: Registration) -> bool {
        let Some(slot) = self.widgets.get_mut(registration.0) else {
            return false;
        };
        let disposed = slot.take().is_some();
        if disposed {
            tracing::debug!(registration = registration.0, "rating widget disposed");
        }
        disposed
    }
}
