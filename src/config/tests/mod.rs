//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: shared test utilities
//! - `precedence`: layer precedence tests
//! - `resolution`: page, base URL, and timeout resolution tests
//! - `loading`: environment and CLI loading tests

mod helpers;
