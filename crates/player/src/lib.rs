//! Questsmith Player crate.
//!
//! Quest brief client: UI, application logic, and HTTP adapters.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::app;
