//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message for the event loop to feed back.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Nothing animates; ticks only keep the event loop responsive
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // View Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectView(view) => {
            state.select_view(view);
            UpdateResult::none()
        }
        Message::NextView => {
            state.next_view();
            UpdateResult::none()
        }
        Message::PrevView => {
            state.prev_view();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Architecture Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectArchitecture(arch) => {
            state.select_architecture(arch);
            UpdateResult::none()
        }
        Message::ToggleArchitecture => {
            state.toggle_architecture();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Unit Cursor
        // ─────────────────────────────────────────────────────────
        Message::CursorNext => {
            state.cursor_next();
            UpdateResult::none()
        }
        Message::CursorPrev => {
            state.cursor_prev();
            UpdateResult::none()
        }
        Message::CursorFirst => {
            state.cursor_first();
            UpdateResult::none()
        }
        Message::CursorLast => {
            state.cursor_last();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail Panel
        // ─────────────────────────────────────────────────────────
        Message::ActivateSelected => match state.current_target() {
            Some(target) => UpdateResult::message(Message::ActivateUnit(target.key)),
            None => UpdateResult::none(),
        },
        Message::ActivateUnit(key) => {
            state.activate_unit(key);
            UpdateResult::none()
        }
        Message::CloseDetail => {
            state.dismiss_detail();
            UpdateResult::none()
        }
        Message::DetailScrollUp => {
            state.detail_scroll_up();
            UpdateResult::none()
        }
        Message::DetailScrollDown => {
            state.detail_scroll_down();
            UpdateResult::none()
        }
    }
}
