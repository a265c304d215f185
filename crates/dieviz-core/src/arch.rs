//! Architecture variants

use std::str::FromStr;

use crate::error::Error;
use crate::layout::{DieConfig, BLACKWELL_DIE, HOPPER_DIE};

/// One of the two supported die designs.
///
/// Selecting a variant fixes the die layout constants, the unit catalog,
/// and the specification sheet. The set is closed; everything keyed by it
/// is resolved through exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Architecture {
    /// Hopper H100 (monolithic die)
    #[default]
    Hopper,

    /// Blackwell B200 (dual-die package)
    Blackwell,
}

impl Architecture {
    /// Product name shown in the header
    pub fn product(&self) -> &'static str {
        match self {
            Architecture::Hopper => "NVIDIA H100",
            Architecture::Blackwell => "NVIDIA B200",
        }
    }

    /// Architecture family tagline shown under the product name
    pub fn tagline(&self) -> &'static str {
        match self {
            Architecture::Hopper => "HOPPER ARCHITECTURE VISUALIZER",
            Architecture::Blackwell => "BLACKWELL ARCHITECTURE VISUALIZER",
        }
    }

    /// Short label used in the architecture tab bar
    pub fn short_label(&self) -> &'static str {
        match self {
            Architecture::Hopper => "H100",
            Architecture::Blackwell => "B200",
        }
    }

    /// Process / transistor footnote shown in the header
    pub fn process_note(&self) -> &'static str {
        match self {
            Architecture::Hopper => "TSMC 4N // 80B TRANSISTORS",
            Architecture::Blackwell => "TSMC 4NP // 208B TRANSISTORS",
        }
    }

    /// The fixed die layout constants for this variant
    pub fn die_config(&self) -> &'static DieConfig {
        match self {
            Architecture::Hopper => &HOPPER_DIE,
            Architecture::Blackwell => &BLACKWELL_DIE,
        }
    }

    /// The other variant (two-way toggle)
    pub fn toggled(&self) -> Architecture {
        match self {
            Architecture::Hopper => Architecture::Blackwell,
            Architecture::Blackwell => Architecture::Hopper,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Architecture::Hopper => write!(f, "hopper"),
            Architecture::Blackwell => write!(f, "blackwell"),
        }
    }
}

impl FromStr for Architecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hopper" | "h100" => Ok(Architecture::Hopper),
            "blackwell" | "b200" => Ok(Architecture::Blackwell),
            other => Err(Error::unknown_architecture(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Architecture::Hopper.toggled(), Architecture::Blackwell);
        assert_eq!(Architecture::Hopper.toggled().toggled(), Architecture::Hopper);
    }

    #[test]
    fn test_die_config_binding() {
        assert_eq!(Architecture::Hopper.die_config().active_sms(), 132);
        assert_eq!(Architecture::Blackwell.die_config().package_active_sms(), 264);
    }

    #[test]
    fn test_from_str_accepts_family_and_product_names() {
        assert_eq!("hopper".parse::<Architecture>().unwrap(), Architecture::Hopper);
        assert_eq!("H100".parse::<Architecture>().unwrap(), Architecture::Hopper);
        assert_eq!("b200".parse::<Architecture>().unwrap(), Architecture::Blackwell);
        assert!("volta".parse::<Architecture>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for arch in [Architecture::Hopper, Architecture::Blackwell] {
            assert_eq!(arch.to_string().parse::<Architecture>().unwrap(), arch);
        }
    }
}
