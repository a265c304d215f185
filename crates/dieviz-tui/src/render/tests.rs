//! Full-screen render tests
//!
//! These render the entire UI for each view/state combination against a
//! TestBackend and assert on visible content.

use super::view;
use crate::test_utils::TestTerminal;
use dieviz_app::state::{AppState, ViewKind};
use dieviz_core::{Architecture, UnitKey};

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 32);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_full_die_screen() {
    let state = AppState::new();
    let term = render_screen(&state);

    assert!(term.buffer_contains("NVIDIA H100"));
    assert!(term.buffer_contains("1 Full GPU Die"));
    assert!(term.buffer_contains("GPC 0"));
    assert!(term.buffer_contains("H100 · 132 active SMs"));
}

#[test]
fn test_specs_screen_switches_with_architecture() {
    let mut state = AppState::new();
    state.select_view(ViewKind::Specs);

    let term = render_screen(&state);
    assert!(term.buffer_contains("50 MB"));

    state.toggle_architecture();
    let term = render_screen(&state);
    assert!(term.buffer_contains("126 MB"));
    assert!(term.buffer_contains("NVIDIA B200"));
}

#[test]
fn test_detail_panel_overlays_view() {
    let mut state = AppState::new();
    state.activate_unit(UnitKey::Hbm3);
    let term = render_screen(&state);

    assert!(term.buffer_contains("HBM3 Memory"));
    assert!(term.buffer_contains("3.35 TB/s"));
    assert!(term.buffer_contains("esc close"));
}

#[test]
fn test_detail_panel_round_trip_renders_identically() {
    let mut state = AppState::new();
    state.activate_unit(UnitKey::NvlinkHub);
    let first = render_screen(&state).content();

    state.dismiss_detail();
    state.activate_unit(UnitKey::NvlinkHub);
    let second = render_screen(&state).content();

    assert_eq!(first, second);
}

#[test]
fn test_closed_panel_leaves_no_overlay() {
    let mut state = AppState::new();
    state.activate_unit(UnitKey::NvlinkHub);
    state.dismiss_detail();
    let term = render_screen(&state);

    assert!(!term.buffer_contains("esc close"));
}

#[test]
fn test_processing_block_screen_per_variant() {
    let mut state = AppState::new();
    state.select_view(ViewKind::ProcessingBlock);
    let term = render_screen(&state);
    assert!(term.buffer_contains("12 warps"));

    state.select_architecture(Architecture::Blackwell);
    let term = render_screen(&state);
    assert!(term.buffer_contains("16 warps"));
    assert!(term.buffer_contains("TMEM"));
}

#[test]
fn test_single_sm_screen() {
    let mut state = AppState::new();
    state.select_view(ViewKind::SingleSm);
    let term = render_screen(&state);

    assert!(term.buffer_contains("STREAMING MULTIPROCESSOR"));
    assert!(term.buffer_contains("SMSP 2"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let state = AppState::new();
    let mut term = TestTerminal::with_size(40, 12);
    term.draw_with(|frame| view(frame, &state));
}
