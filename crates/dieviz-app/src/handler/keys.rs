//! Key event handlers for the two UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ViewKind};

/// Convert key events to messages based on current UI mode.
///
/// While the detail panel is open it captures every key; the diagram
/// underneath receives nothing until the panel is dismissed.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.detail.is_open() {
        handle_key_detail(key)
    } else {
        handle_key_normal(key)
    }
}

/// Handle key events while the detail panel is open
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        // Dismiss
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseDetail),

        // Scroll panel body
        InputKey::Up | InputKey::Char('k') => Some(Message::DetailScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::DetailScrollDown),
        InputKey::PageUp => Some(Message::DetailScrollUp),
        InputKey::PageDown => Some(Message::DetailScrollDown),

        // Force quit even with the panel open
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in normal (diagram) mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // View Tabs
        // ─────────────────────────────────────────────────────────
        InputKey::Char('1') => Some(Message::SelectView(ViewKind::FullDie)),
        InputKey::Char('2') => Some(Message::SelectView(ViewKind::ProcessingBlock)),
        InputKey::Char('3') => Some(Message::SelectView(ViewKind::SingleSm)),
        InputKey::Char('4') => Some(Message::SelectView(ViewKind::Specs)),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PrevView),

        // Architecture toggle
        InputKey::Char('a') => Some(Message::ToggleArchitecture),

        // ─────────────────────────────────────────────────────────
        // Unit Cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Right | InputKey::Down | InputKey::Char('l') | InputKey::Char('j') => {
            Some(Message::CursorNext)
        }
        InputKey::Left | InputKey::Up | InputKey::Char('h') | InputKey::Char('k') => {
            Some(Message::CursorPrev)
        }
        InputKey::Home => Some(Message::CursorFirst),
        InputKey::End => Some(Message::CursorLast),

        // Activate the unit under the cursor
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateSelected),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dieviz_core::UnitKey;

    fn open_state() -> AppState {
        let mut state = AppState::new();
        state.activate_unit(UnitKey::Gpc);
        state
    }

    #[test]
    fn test_normal_mode_quit_keys() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
        assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
    }

    #[test]
    fn test_normal_mode_view_selection() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Char('3')),
            Some(Message::SelectView(ViewKind::SingleSm))
        );
        assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::NextView));
        assert_eq!(handle_key(&state, InputKey::BackTab), Some(Message::PrevView));
    }

    #[test]
    fn test_normal_mode_cursor_and_activation() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Right), Some(Message::CursorNext));
        assert_eq!(handle_key(&state, InputKey::Char('h')), Some(Message::CursorPrev));
        assert_eq!(handle_key(&state, InputKey::Home), Some(Message::CursorFirst));
        assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::ActivateSelected));
    }

    #[test]
    fn test_normal_mode_architecture_toggle() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Char('a')),
            Some(Message::ToggleArchitecture)
        );
    }

    #[test]
    fn test_detail_mode_captures_dismiss_keys() {
        let state = open_state();
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::CloseDetail));
        assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::CloseDetail));
        assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::CloseDetail));
    }

    #[test]
    fn test_detail_mode_swallows_navigation() {
        // No cursor movement or tab switching leaks through an open panel
        let state = open_state();
        assert_eq!(handle_key(&state, InputKey::Tab), None);
        assert_eq!(handle_key(&state, InputKey::Char('a')), None);
        assert_eq!(handle_key(&state, InputKey::Char('2')), None);
        assert_eq!(handle_key(&state, InputKey::Right), None);
    }

    #[test]
    fn test_detail_mode_scrolls() {
        let state = open_state();
        assert_eq!(handle_key(&state, InputKey::Down), Some(Message::DetailScrollDown));
        assert_eq!(handle_key(&state, InputKey::Up), Some(Message::DetailScrollUp));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Char('z')), None);
    }
}
