//! Focus and rating handlers for the TUI.
//!
//! The keyboard plays the pointer: moving the preview is a hover over a
//! star, pressing `Enter` is a click, and moving focus away from a
//! container is the pointer leaving its star row.

use bubbletea_rs::Cmd;

use super::RatingApp;
use crate::rating::MAX_RATING;
use crate::widget::{Registration, WidgetEvent};

impl RatingApp {
    /// Moves focus by `step` containers, wrapping at either end.
    pub(super) fn move_focus(&mut self, step: isize) -> Option<Cmd> {
        let count = self.registrations.len();
        if count < 2 {
            return None;
        }
        let leave = self.leave_focused();
        self.focus = self.focus.checked_add_signed(step).map_or(count - 1, |next| {
            if next >= count { 0 } else { next }
        });
        leave
    }

    /// Sends `HoverLeave` to the focused widget if it is previewing.
    fn leave_focused(&mut self) -> Option<Cmd> {
        let registration = self.focused_registration()?;
        self.focused_widget()?.hovered()?;
        self.dispatch(registration, WidgetEvent::HoverLeave)
    }

    /// Moves the hover preview of the focused container by one star.
    ///
    /// The preview starts from the committed value. Stepping below the
    /// first star ends the preview.
    pub(super) fn handle_hover_step(&mut self, step: i16) -> Option<Cmd> {
        let registration = self.focused_registration()?;
        let widget = self.registry.widget(registration)?;
        let current = widget
            .hovered()
            .unwrap_or_else(|| widget.container().pending());
        let next = i16::from(current).saturating_add(step);
        let event = match u8::try_from(next) {
            Ok(0) | Err(_) => WidgetEvent::HoverLeave,
            Ok(position) => WidgetEvent::HoverEnter {
                position: position.min(MAX_RATING),
            },
        };
        self.dispatch(registration, event)
    }

    /// Activates the previewed star of the focused container.
    pub(super) fn handle_activate_hovered(&mut self) -> Option<Cmd> {
        let position = self.focused_widget()?.hovered()?;
        self.handle_activate_star(position)
    }

    /// Activates a star of the focused container.
    pub(super) fn handle_activate_star(&mut self, position: u8) -> Option<Cmd> {
        let registration = self.focused_registration()?;
        self.dispatch(registration, WidgetEvent::Activate { position })
    }

    /// Submits the focused container's form.
    pub(super) fn handle_submit_focused(&mut self) -> Option<Cmd> {
        let registration = self.focused_registration()?;
        self.dispatch(registration, WidgetEvent::Submit)
    }

    /// Routes an event to a widget and converts its effects to commands.
    pub(super) fn dispatch(
        &mut self,
        registration: Registration,
        event: WidgetEvent,
    ) -> Option<Cmd> {
        let effects = self.registry.dispatch(registration, event);
        self.commands_for(registration, effects)
    }
}
