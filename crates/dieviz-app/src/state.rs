//! Application state (Model in TEA pattern)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::targets::{targets, Target};
use dieviz_core::prelude::*;
use dieviz_core::{unit_info, Architecture, UnitKey};

/// The four selectable views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// All GPCs with the TPC/SM grid and surrounding memory/interconnect
    #[default]
    FullDie,

    /// One SMSP processing block (pipeline front-end + compute columns)
    ProcessingBlock,

    /// One generic SM broken down into its four SMSPs
    SingleSm,

    /// The static specification sheet
    Specs,
}

impl ViewKind {
    /// All views in tab order
    pub const ALL: &'static [ViewKind] = &[
        ViewKind::FullDie,
        ViewKind::ProcessingBlock,
        ViewKind::SingleSm,
        ViewKind::Specs,
    ];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::FullDie => "Full GPU Die",
            ViewKind::ProcessingBlock => "SMSP Quadrant",
            ViewKind::SingleSm => "Single SM Detail",
            ViewKind::Specs => "Specifications",
        }
    }

    /// Position in tab order
    pub fn index(&self) -> usize {
        ViewKind::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// Next view in tab order, wrapping
    pub fn next(&self) -> ViewKind {
        ViewKind::ALL[(self.index() + 1) % ViewKind::ALL.len()]
    }

    /// Previous view in tab order, wrapping
    pub fn prev(&self) -> ViewKind {
        let len = ViewKind::ALL.len();
        ViewKind::ALL[(self.index() + len - 1) % len]
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full-die" => Ok(ViewKind::FullDie),
            "processing-block" | "smsp" => Ok(ViewKind::ProcessingBlock),
            "single-sm" => Ok(ViewKind::SingleSm),
            "specs" => Ok(ViewKind::Specs),
            other => Err(Error::unknown_view(other)),
        }
    }
}

/// Detail panel state: closed, or open on one resolvable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,

    Open {
        key: UnitKey,
        /// Vertical scroll offset within the panel body
        scroll: u16,
    },
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open { .. })
    }

    pub fn key(&self) -> Option<UnitKey> {
        match self {
            DetailState::Open { key, .. } => Some(*key),
            DetailState::Closed => None,
        }
    }
}

/// Per-view unit cursors.
///
/// Each diagram view remembers its own cursor so switching tabs does not
/// lose the user's place. The Specs view has no activatable units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ViewCursors {
    full_die: usize,
    processing_block: usize,
    single_sm: usize,
}

/// The single owner of all mutable UI state.
///
/// Views read this; only the update path mutates it, and only through the
/// transition methods below.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active architecture variant
    pub architecture: Architecture,

    /// Active view tab
    pub active_view: ViewKind,

    /// Detail panel state
    pub detail: DetailState,

    /// Loaded settings (read-only after startup)
    pub settings: Settings,

    cursors: ViewCursors,
    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create initial state honouring the configured startup defaults
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            architecture: settings.ui.default_architecture.into(),
            active_view: settings.ui.default_view,
            detail: DetailState::Closed,
            cursors: ViewCursors::default(),
            should_quit: false,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────
    // View selection
    // ─────────────────────────────────────────────────────────

    pub fn select_view(&mut self, view: ViewKind) {
        self.active_view = view;
    }

    pub fn next_view(&mut self) {
        self.active_view = self.active_view.next();
    }

    pub fn prev_view(&mut self) {
        self.active_view = self.active_view.prev();
    }

    // ─────────────────────────────────────────────────────────
    // Architecture selection
    // ─────────────────────────────────────────────────────────

    /// Switch the active variant.
    ///
    /// An open detail panel is closed: its key may not resolve (or may
    /// describe different silicon) under the new variant, and showing stale
    /// content across the switch helps nobody. Cursors are clamped because
    /// the variants' target lists differ in length.
    pub fn select_architecture(&mut self, arch: Architecture) {
        if self.architecture == arch {
            return;
        }
        self.architecture = arch;
        self.dismiss_detail();
        self.clamp_cursors();
    }

    pub fn toggle_architecture(&mut self) {
        self.select_architecture(self.architecture.toggled());
    }

    // ─────────────────────────────────────────────────────────
    // Unit cursor
    // ─────────────────────────────────────────────────────────

    /// Cursor position within the active view's target list
    pub fn cursor(&self) -> usize {
        match self.active_view {
            ViewKind::FullDie => self.cursors.full_die,
            ViewKind::ProcessingBlock => self.cursors.processing_block,
            ViewKind::SingleSm => self.cursors.single_sm,
            ViewKind::Specs => 0,
        }
    }

    fn set_cursor(&mut self, position: usize) {
        match self.active_view {
            ViewKind::FullDie => self.cursors.full_die = position,
            ViewKind::ProcessingBlock => self.cursors.processing_block = position,
            ViewKind::SingleSm => self.cursors.single_sm = position,
            ViewKind::Specs => {}
        }
    }

    /// Number of activatable units in the active view
    pub fn target_count(&self) -> usize {
        targets(self.architecture, self.active_view).len()
    }

    /// The unit under the cursor, if the active view has any
    pub fn current_target(&self) -> Option<Target> {
        targets(self.architecture, self.active_view)
            .into_iter()
            .nth(self.cursor())
    }

    pub fn cursor_next(&mut self) {
        let count = self.target_count();
        if count > 0 {
            self.set_cursor((self.cursor() + 1) % count);
        }
    }

    pub fn cursor_prev(&mut self) {
        let count = self.target_count();
        if count > 0 {
            self.set_cursor((self.cursor() + count - 1) % count);
        }
    }

    pub fn cursor_first(&mut self) {
        self.set_cursor(0);
    }

    pub fn cursor_last(&mut self) {
        let count = self.target_count();
        if count > 0 {
            self.set_cursor(count - 1);
        }
    }

    fn clamp_cursors(&mut self) {
        let clamp = |cursor: usize, arch, view| {
            let count = targets(arch, view).len();
            if count == 0 {
                0
            } else {
                cursor.min(count - 1)
            }
        };
        self.cursors.full_die = clamp(self.cursors.full_die, self.architecture, ViewKind::FullDie);
        self.cursors.processing_block = clamp(
            self.cursors.processing_block,
            self.architecture,
            ViewKind::ProcessingBlock,
        );
        self.cursors.single_sm = clamp(self.cursors.single_sm, self.architecture, ViewKind::SingleSm);
    }

    // ─────────────────────────────────────────────────────────
    // Detail panel
    // ─────────────────────────────────────────────────────────

    /// Open the detail panel on `key` if the active catalog describes it.
    ///
    /// An unresolvable key is logged once and is otherwise a no-op; the
    /// interaction must never disturb existing state.
    pub fn activate_unit(&mut self, key: UnitKey) {
        if unit_info(self.architecture, key).is_some() {
            self.detail = DetailState::Open { key, scroll: 0 };
        } else {
            warn!("No data for unit: {key}");
        }
    }

    /// Close the detail panel. Idempotent.
    pub fn dismiss_detail(&mut self) {
        self.detail = DetailState::Closed;
    }

    pub fn detail_scroll_up(&mut self) {
        if let DetailState::Open { scroll, .. } = &mut self.detail {
            *scroll = scroll.saturating_sub(1);
        }
    }

    pub fn detail_scroll_down(&mut self) {
        if let DetailState::Open { scroll, .. } = &mut self.detail {
            *scroll = scroll.saturating_add(1);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.architecture, Architecture::Hopper);
        assert_eq!(state.active_view, ViewKind::FullDie);
        assert!(!state.detail.is_open());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_view_cycle_wraps_both_ways() {
        let mut state = AppState::new();
        for _ in 0..ViewKind::ALL.len() {
            state.next_view();
        }
        assert_eq!(state.active_view, ViewKind::FullDie);
        state.prev_view();
        assert_eq!(state.active_view, ViewKind::Specs);
    }

    #[test]
    fn test_activate_resolvable_key_opens_panel() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::TensorCore);
        assert_eq!(state.detail.key(), Some(UnitKey::TensorCore));
    }

    #[test]
    fn test_activate_unresolvable_key_is_a_silent_noop() {
        // TMEM has no Hopper catalog entry
        let mut state = AppState::new();
        let before = state.clone();
        state.activate_unit(UnitKey::Tmem);
        assert_eq!(state.detail, before.detail);
        assert_eq!(state.architecture, before.architecture);
        assert_eq!(state.active_view, before.active_view);
        assert_eq!(state.cursor(), before.cursor());
    }

    #[test]
    fn test_detail_round_trip() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::L2Cache);
        let first_open = state.detail;
        state.dismiss_detail();
        assert!(!state.detail.is_open());
        state.activate_unit(UnitKey::L2Cache);
        assert_eq!(state.detail, first_open);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut state = AppState::new();
        state.dismiss_detail();
        state.dismiss_detail();
        assert!(!state.detail.is_open());
    }

    #[test]
    fn test_reopen_resets_scroll() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::Sm);
        state.detail_scroll_down();
        state.detail_scroll_down();
        state.dismiss_detail();
        state.activate_unit(UnitKey::Sm);
        assert_eq!(state.detail, DetailState::Open { key: UnitKey::Sm, scroll: 0 });
    }

    #[test]
    fn test_architecture_switch_closes_panel() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::TensorCore);
        state.toggle_architecture();
        assert_eq!(state.architecture, Architecture::Blackwell);
        assert!(!state.detail.is_open());
    }

    #[test]
    fn test_selecting_same_architecture_keeps_panel() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::TensorCore);
        state.select_architecture(Architecture::Hopper);
        assert!(state.detail.is_open());
    }

    #[test]
    fn test_architecture_switch_clamps_cursor() {
        let mut state = AppState::new();
        state.cursor_last();
        let hopper_last = state.cursor();
        state.toggle_architecture();
        // Blackwell's full-die list is shorter than Hopper's
        assert!(state.cursor() < hopper_last);
        assert!(state.cursor() < state.target_count());
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = AppState::new();
        state.cursor_prev();
        assert_eq!(state.cursor(), state.target_count() - 1);
        state.cursor_next();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_cursor_is_per_view() {
        let mut state = AppState::new();
        state.cursor_next();
        state.cursor_next();
        state.select_view(ViewKind::ProcessingBlock);
        assert_eq!(state.cursor(), 0);
        state.select_view(ViewKind::FullDie);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_specs_view_has_no_cursor() {
        let mut state = AppState::new();
        state.select_view(ViewKind::Specs);
        assert_eq!(state.target_count(), 0);
        state.cursor_next();
        assert_eq!(state.cursor(), 0);
        assert!(state.current_target().is_none());
    }

    #[test]
    fn test_detail_scroll_saturates_at_zero() {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::Gpc);
        state.detail_scroll_up();
        assert_eq!(state.detail, DetailState::Open { key: UnitKey::Gpc, scroll: 0 });
    }
}
