//! Configuration loading for DieViz
//!
//! Settings live in `<config dir>/dieviz/config.toml` (e.g.
//! `~/.config/dieviz/config.toml` on Linux). Every field is optional;
//! a missing or unparseable file falls back to defaults with a logged
//! warning rather than failing startup.

mod settings;
mod types;

pub use settings::{config_file_path, load_settings, load_settings_from};
pub use types::{ArchChoice, IconMode, Settings, UiSettings};
