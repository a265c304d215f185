//! dieviz-app - Application state and orchestration for DieViz
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the messages ([`Message`]), and the
//! update function ([`handler::update`]). It also owns the configuration
//! layer and the activation-target lists the TUI navigates.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod targets;

// Re-export primary types
pub use config::{load_settings, IconMode, Settings};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, DetailState, ViewKind};
pub use targets::{targets, Target};
