//! Configuration types for DieViz

use serde::{Deserialize, Serialize};

use crate::state::ViewKind;
use dieviz_core::Architecture;

/// Application settings (`dieviz/config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon rendering mode
    #[serde(default)]
    pub icons: IconMode,

    /// Architecture variant shown on startup
    #[serde(default)]
    pub default_architecture: ArchChoice,

    /// View tab shown on startup
    #[serde(default)]
    pub default_view: ViewKind,
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Rich Nerd Font glyphs (requires a Nerd Font installed)
    NerdFonts,
}

/// Serializable mirror of [`Architecture`] for the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchChoice {
    #[default]
    Hopper,
    Blackwell,
}

impl From<ArchChoice> for Architecture {
    fn from(choice: ArchChoice) -> Self {
        match choice {
            ArchChoice::Hopper => Architecture::Hopper,
            ArchChoice::Blackwell => Architecture::Blackwell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.default_architecture, ArchChoice::Hopper);
        assert_eq!(settings.ui.default_view, ViewKind::FullDie);
    }

    #[test]
    fn test_arch_choice_conversion() {
        assert_eq!(Architecture::from(ArchChoice::Hopper), Architecture::Hopper);
        assert_eq!(
            Architecture::from(ArchChoice::Blackwell),
            Architecture::Blackwell
        );
    }

    #[test]
    fn test_icon_mode_kebab_case() {
        let ui: UiSettings = toml::from_str("icons = \"nerd-fonts\"").unwrap();
        assert_eq!(ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_partial_ui_section_fills_defaults() {
        let ui: UiSettings = toml::from_str("default_architecture = \"blackwell\"").unwrap();
        assert_eq!(ui.default_architecture, ArchChoice::Blackwell);
        assert_eq!(ui.icons, IconMode::Unicode);
        assert_eq!(ui.default_view, ViewKind::FullDie);
    }
}
