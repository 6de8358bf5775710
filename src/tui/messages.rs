//! Message types for the TUI update loop.
//!
//! Messages represent user actions, completed async commands (timers and
//! submissions), and system events.

use crate::widget::{Registration, WidgetEvent};

/// Messages for the rating TUI application.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    // Focus
    /// Move focus to the next rating container.
    FocusNext,
    /// Move focus to the previous rating container.
    FocusPrevious,

    // Rating interaction on the focused container
    /// Preview one more star.
    HoverNext,
    /// Preview one fewer star.
    HoverPrevious,
    /// Activate the previewed star.
    ActivateHovered,
    /// Activate the star at a 1-based position.
    ActivateStar(u8),
    /// Submit the focused container's form.
    SubmitFocused,

    // Widget plumbing
    /// Event delivered to a widget by a finished timer or submission.
    Widget {
        /// Widget the event is addressed to.
        registration: Registration,
        /// The event itself.
        event: WidgetEvent,
    },

    // Application lifecycle
    /// Synthetic startup message.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for focus movement messages.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusNext | Self::FocusPrevious)
    }

    /// Returns true for interaction with the focused container.
    #[must_use]
    pub const fn is_rating(&self) -> bool {
        matches!(
            self,
            Self::HoverNext
                | Self::HoverPrevious
                | Self::ActivateHovered
                | Self::ActivateStar(_)
                | Self::SubmitFocused
        )
    }

    /// Returns true for events addressed to a specific widget.
    #[must_use]
    pub const fn is_widget(&self) -> bool {
        matches!(self, Self::Widget { .. })
    }
}
