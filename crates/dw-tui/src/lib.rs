//! Terminal UI for dicewell.
//!
//! Provides a ratatui-based interface with two tabs: a dice roller with a
//! timed rolling transition, and the mental health companion form.

pub mod app;
pub mod config;
pub mod logging;
pub mod shared;
pub mod tabs;
pub mod terminal;
pub mod transition;
