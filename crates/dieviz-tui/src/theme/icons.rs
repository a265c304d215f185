//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use dieviz_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Status dot in the header
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    /// Fused-off slot marker
    pub fn cross(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f467}", // nf-oct-x
            IconMode::Unicode => "\u{00d7}",   // ×
        }
    }

    /// Cursor pointer in the footer
    pub fn pointer(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    /// Bullet in detail-panel sections
    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0da}", // nf-fa-caret_right
            IconMode::Unicode => "\u{25b9}",   // ▹
        }
    }

    /// Die/chip marker in the header
    pub fn chip(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2db}", // nf-fa-microchip
            IconMode::Unicode => "[C]",
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_plain() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.cross(), "×");
        assert_eq!(icons.bullet(), "▹");
    }

    #[test]
    fn test_nerd_font_icons_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.dot(), nerd.dot());
        assert_ne!(unicode.chip(), nerd.chip());
    }
}
