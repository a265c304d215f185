//! Color palette for the die-schematic theme.
//!
//! The per-unit hue language follows the schematic convention: cyan for
//! host interface, green for compute, blue for memory, magenta for
//! interconnect, yellow for scheduling.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::Rgb(20, 24, 34); // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Unit hues ---
pub const UNIT_INTERFACE: Color = Color::Cyan; // PCIe, host-facing bars
pub const UNIT_SCHEDULER: Color = Color::Yellow; // Warp scheduler, dispatch, GigaThread
pub const UNIT_COMPUTE: Color = Color::Green; // SM/TPC grid, tensor cores
pub const UNIT_MEMORY: Color = Color::Blue; // L2, HBM, memory controllers
pub const UNIT_INTERCONNECT: Color = Color::Magenta; // NVLink switches and hub
pub const UNIT_CACHE: Color = Color::LightBlue; // L0/L1 caches, register file
pub const UNIT_SFU: Color = Color::LightMagenta; // SFU / LD-ST footer groups

// --- Disabled slots ---
pub const DISABLED_FG: Color = Color::Red;
pub const DISABLED_DIM: Color = Color::DarkGray;

// --- Selection ---
pub const CONTRAST_FG: Color = Color::Black; // fg over ACCENT-filled cells

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8); // Modal drop shadow

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = UNIT_COMPUTE;
    }

    #[test]
    fn test_modal_backgrounds_are_rgb() {
        match POPUP_BG {
            Color::Rgb(_, _, _) => {}
            _ => panic!("POPUP_BG should be RGB"),
        }
    }
}
