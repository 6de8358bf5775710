//! Rendering logic for the rating TUI.
//!
//! These are pure query methods that read state without modification.

use super::RatingApp;
use crate::rating::MAX_RATING;
use crate::tui::components::RatingInputViewContext;

/// Title shown when the page has none.
const DEFAULT_TITLE: &str = "Starboard";

/// Key hints shown in the status bar.
const STATUS_HINTS: &str = "Tab:next  ←/→:preview  Enter/1-5:rate  s:submit  ?:help  q:quit";

const HELP_LINES: &[&str] = &[
    "Keyboard shortcuts",
    "",
    "  Tab / ↓ / j        focus next item",
    "  Shift-Tab / ↑ / k  focus previous item",
    "  → / l              preview one more star",
    "  ← / h              preview one fewer star",
    "  Enter / Space      rate with the previewed star",
    "  1-5                rate directly",
    "  s                  submit the rating",
    "  ?                  close this help",
    "  q / Esc            quit",
];

impl RatingApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let busy = if self.is_submitting() {
            " [Submitting...]"
        } else {
            ""
        };
        format!("{title}{busy}\n")
    }

    /// Renders every rating container in document order.
    pub(super) fn render_containers(&self) -> String {
        let focused = self.focused_registration();
        let mut output = String::new();
        for (registration, widget) in self.registry.widgets() {
            let ctx = RatingInputViewContext {
                widget,
                focused: focused == Some(registration),
            };
            output.push_str(&self.input_component.view(&ctx));
        }
        if output.is_empty() {
            output.push_str("  No rating containers on this page.\n");
        }
        output
    }

    /// Renders the aggregate displays, if the page has any.
    pub(super) fn render_displays(&self) -> String {
        let displays = self.registry.board().displays();
        if displays.is_empty() {
            return String::new();
        }
        let mut output = String::from("\nAverage ratings\n");
        for display in displays {
            output.push_str(&self.display_component.view(display));
        }
        output
    }

    /// Renders the status bar: the focused preview, if any, and key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let preview = self.focused_widget().and_then(|widget| {
            widget
                .hovered()
                .map(|position| (widget.container().item_id(), position))
        });
        preview.map_or_else(
            || format!("{STATUS_HINTS}\n"),
            |(item_id, position)| {
                format!("Item {item_id}: preview {position} of {MAX_RATING}  |  {STATUS_HINTS}\n")
            },
        )
    }

    /// Renders the full page frame before viewport normalisation.
    pub(super) fn render_page(&self) -> String {
        let mut output = self.render_header();
        output.push('\n');
        output.push_str(&self.render_containers());
        output.push_str(&self.render_displays());

        let used = output.lines().count().saturating_add(1);
        let spare = usize::from(self.height).saturating_sub(used);
        output.push_str(&"\n".repeat(spare));
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let mut output = HELP_LINES.join("\n");
        output.push('\n');
        output
    }
}
