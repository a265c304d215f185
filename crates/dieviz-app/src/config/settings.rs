//! Settings parser for dieviz/config.toml

use std::path::{Path, PathBuf};

use dieviz_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const DIEVIZ_DIR: &str = "dieviz";

/// Path of the user config file, if a config directory exists on this platform
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(DIEVIZ_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config file.
///
/// A missing file is normal (first run). A file that fails to parse is
/// logged and ignored -- startup always succeeds with defaults.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path (also used by tests)
pub fn load_settings_from(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => {
            debug!("No config file at {}, using default settings", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Invalid config file {}: {e}, using default settings", path.display());
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArchChoice, IconMode};
    use crate::state::ViewKind;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("nope.toml"));
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_invalid_toml_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "[ui\nicons = what");
        let settings = load_settings_from(&path);
        assert_eq!(settings.ui.default_architecture, ArchChoice::Hopper);
    }

    #[test]
    fn test_explicit_values_are_honoured() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
[ui]
icons = "nerd-fonts"
default_architecture = "blackwell"
default_view = "specs"
"#,
        );
        let settings = load_settings_from(&path);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.default_architecture, ArchChoice::Blackwell);
        assert_eq!(settings.ui.default_view, ViewKind::Specs);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_config(temp.path(), "");
        let settings = load_settings_from(&path);
        assert_eq!(settings.ui.default_view, ViewKind::FullDie);
    }
}
