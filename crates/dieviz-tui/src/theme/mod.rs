//! Centralized theme system for the die-schematic TUI design.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Glyph constants with Unicode/Nerd Font modes

pub mod icons;
pub mod palette;
pub mod styles;
