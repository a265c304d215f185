//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::ViewKind;
use dieviz_core::{Architecture, UnitKey};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Selection
    // ─────────────────────────────────────────────────────────
    /// Jump to a specific view
    SelectView(ViewKind),
    /// Cycle to the next view tab
    NextView,
    /// Cycle to the previous view tab
    PrevView,

    // ─────────────────────────────────────────────────────────
    // Architecture Selection
    // ─────────────────────────────────────────────────────────
    /// Select a specific architecture variant
    SelectArchitecture(Architecture),
    /// Flip between the two architecture variants
    ToggleArchitecture,

    // ─────────────────────────────────────────────────────────
    // Unit Cursor
    // ─────────────────────────────────────────────────────────
    /// Move the unit cursor forward
    CursorNext,
    /// Move the unit cursor backward
    CursorPrev,
    /// Jump the unit cursor to the first unit
    CursorFirst,
    /// Jump the unit cursor to the last unit
    CursorLast,

    // ─────────────────────────────────────────────────────────
    // Detail Panel
    // ─────────────────────────────────────────────────────────
    /// Activate the unit under the cursor
    ActivateSelected,
    /// Activate a specific unit (opens the detail panel if it resolves)
    ActivateUnit(UnitKey),
    /// Dismiss the detail panel (no-op when already closed)
    CloseDetail,
    /// Scroll the open detail panel up
    DetailScrollUp,
    /// Scroll the open detail panel down
    DetailScrollDown,
}
