//! CLI operation mode handlers.
//!
//! - [`rating_tui`]: interactive TUI for rating the page's items
//! - [`snapshot`]: plain-text rendering of the page for `--no-tui`

pub mod rating_tui;
pub mod snapshot;
