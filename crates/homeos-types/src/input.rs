//! Terminal input events.
//!
//! The interactive surface (whatever renders the terminal) maps its native
//! key handling to these events. The core never sees raw platform input:
//! history recall and completion are driven by discrete events, not by
//! inspecting key codes.

use serde::{Deserialize, Serialize};

/// One input event delivered to the terminal input surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Character typed into the input line.
    TextInput(char),
    /// Delete the character left of the cursor.
    Backspace,
    /// Submit the current input line (Enter).
    Submit,
    /// Recall the previous history entry (Up arrow).
    HistoryUp,
    /// Recall the next history entry (Down arrow).
    HistoryDown,
    /// Request tab completion for the current input.
    Complete,
    /// Close the terminal (window close, Ctrl-D, ...).
    Quit,
}
