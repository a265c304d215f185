//! dieviz-tui - Terminal UI for DieViz
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! screen layout, the view widgets, and the main draw/update loop over
//! `dieviz-app`'s state machine.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
