//! Terminal user interface for rating items.
//!
//! The TUI stands in for a browser page: every rating container is drawn as
//! a row of stars, the keyboard plays the pointer, and aggregate displays
//! are patched in place when a submission succeeds.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`app::RatingApp`], which owns a
//!   [`WidgetRegistry`](crate::widget::WidgetRegistry)
//! - **Update**: key events become [`messages::AppMsg`]s, which become
//!   widget events; widget effects become commands
//! - **View**: [`components`] render containers and displays
//!
//! # Initial Data Loading
//!
//! bubbletea-rs's `Model::init()` is a static function, so startup context
//! (the page, the gateway, the telemetry sink) is handed over through
//! module-level storage. Call [`set_initial_page`] and [`set_gateway`]
//! before starting the program.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::RatingApp;
pub use storage::{set_gateway, set_initial_page, set_initial_terminal_size, set_telemetry_sink};
pub(crate) use storage::{
    get_gateway, get_initial_page, get_initial_terminal_size, get_telemetry_sink,
};
