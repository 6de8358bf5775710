//! Main TUI application model implementing the MVU pattern.
//!
//! `RatingApp` owns the widget registry for the page and tracks which
//! container has keyboard focus. Key presses are translated into widget
//! events for the focused container; the effects the widgets return are
//! turned into bubbletea-rs commands whose results come back as
//! [`AppMsg::Widget`] messages.
//!
//! # Module Structure
//!
//! - `commands`: effect-to-command conversion (timers and submissions)
//! - `model_impl`: the `bubbletea_rs::Model` implementation
//! - `rating_handlers`: focus and rating message handlers
//! - `rendering`: view rendering
//! - `routing`: message dispatch by category
//! - `viewport`: frame normalisation to the terminal size

use std::fmt;
use std::sync::Arc;

use crate::page::Page;
use crate::submit::RatingGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};
use crate::widget::{Registration, RatingWidget, WidgetRegistry};

use super::components::{RatingDisplayComponent, RatingInputComponent};

mod commands;
mod model_impl;
mod rating_handlers;
mod rendering;
mod routing;
mod viewport;

pub use viewport::normalise_viewport;

/// Fallback terminal width before the first resize event.
const DEFAULT_WIDTH: u16 = 80;

/// Fallback terminal height before the first resize event.
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the rating TUI.
pub struct RatingApp {
    title: Option<String>,
    registry: WidgetRegistry,
    registrations: Vec<Registration>,
    /// Index into `registrations` of the focused container.
    focus: usize,
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    has_initialized: bool,
    gateway: Option<Arc<dyn RatingGateway>>,
    telemetry: Arc<dyn TelemetrySink>,
    input_component: RatingInputComponent,
    display_component: RatingDisplayComponent,
}

impl fmt::Debug for RatingApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingApp")
            .field("title", &self.title)
            .field("registry", &self.registry)
            .field("focus", &self.focus)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .field("has_gateway", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}

impl RatingApp {
    /// Creates an application for a discovered page.
    ///
    /// Every container is wired through [`WidgetRegistry::initialize`], so
    /// pre-populated ratings are visible in the first frame.
    #[must_use]
    pub fn new(page: Page) -> Self {
        let label_width = label_width(&page);
        let (registry, registrations) = WidgetRegistry::initialize(page.containers, page.displays);
        Self {
            title: page.title,
            registry,
            registrations,
            focus: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_help: false,
            has_initialized: false,
            gateway: None,
            telemetry: Arc::new(NoopTelemetrySink),
            input_component: RatingInputComponent::new(label_width),
            display_component: RatingDisplayComponent::new(label_width),
        }
    }

    /// Sets the gateway used for submissions.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn RatingGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Sets the telemetry sink that receives submission events.
    #[must_use]
    pub fn with_telemetry_sink(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Sets the terminal dimensions used before the first resize event.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The widget registry backing the page.
    #[must_use]
    pub const fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Registration of the focused container, if the page has any.
    #[must_use]
    pub fn focused_registration(&self) -> Option<Registration> {
        self.registrations.get(self.focus).copied()
    }

    /// The focused widget, if any.
    #[must_use]
    pub fn focused_widget(&self) -> Option<&RatingWidget> {
        self.focused_registration()
            .and_then(|registration| self.registry.widget(registration))
    }

    /// Index of the focused container in document order.
    #[must_use]
    pub const fn focus_index(&self) -> usize {
        self.focus
    }

    /// Whether a submission is outstanding for any container.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.registry
            .widgets()
            .any(|(_, widget)| widget.is_submitting())
    }
}

/// Width of the longest `Item <id>` label on the page.
fn label_width(page: &Page) -> usize {
    let containers = page.containers.iter().map(|container| container.item_id());
    let displays = page.displays.iter().map(|display| display.item_id());
    containers
        .chain(displays)
        .map(|item_id| "Item ".len().saturating_add(item_id.as_str().chars().count()))
        .max()
        .unwrap_or(0)
}
