//! Message routing and dispatch logic.
//!
//! Messages are dispatched by category: focus movement, interaction with
//! the focused container, events addressed to a specific widget, and
//! lifecycle messages.

use bubbletea_rs::Cmd;

use super::RatingApp;
use crate::tui::messages::AppMsg;

impl RatingApp {
    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function; it returns any command the message
    /// produced.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_focus() {
            return self.handle_focus_msg(msg);
        }
        if msg.is_rating() {
            return self.handle_rating_msg(msg);
        }
        if msg.is_widget() {
            return self.handle_widget_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches focus messages to their handlers.
    fn handle_focus_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusNext => self.move_focus(1),
            AppMsg::FocusPrevious => self.move_focus(-1),
            _ => {
                // Unreachable: caller filters to focus messages.
                None
            }
        }
    }

    /// Dispatches rating messages to their handlers.
    fn handle_rating_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::HoverNext => self.handle_hover_step(1),
            AppMsg::HoverPrevious => self.handle_hover_step(-1),
            AppMsg::ActivateHovered => self.handle_activate_hovered(),
            AppMsg::ActivateStar(position) => self.handle_activate_star(*position),
            AppMsg::SubmitFocused => self.handle_submit_focused(),
            _ => {
                // Unreachable: caller filters to rating messages.
                None
            }
        }
    }

    /// Routes a widget-addressed event through the registry.
    fn handle_widget_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let AppMsg::Widget {
            registration,
            event,
        } = msg
        else {
            return None;
        };
        self.dispatch(*registration, event.clone())
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => {
                self.handle_initialized();
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Handles the one-shot startup message.
    fn handle_initialized(&mut self) {
        if self.has_initialized {
            return;
        }
        self.has_initialized = true;
        tracing::debug!(
            containers = self.registrations.len(),
            displays = self.registry.board().displays().len(),
            "rating TUI started"
        );
    }
}
