//! Key bindings for the textinput component.

use crate::key::Binding;
use crossterm::event::{KeyCode, KeyModifiers};

/// Editing keys understood by a focused text input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
}

/// The default editing keys, following readline conventions.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: Binding::new(vec![
            (KeyCode::Right, KeyModifiers::NONE),
            (KeyCode::Char('f'), KeyModifiers::CONTROL),
        ]),
        character_backward: Binding::new(vec![
            (KeyCode::Left, KeyModifiers::NONE),
            (KeyCode::Char('b'), KeyModifiers::CONTROL),
        ]),
        delete_before_cursor: Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)]),
        delete_after_cursor: Binding::new(vec![(KeyCode::Char('k'), KeyModifiers::CONTROL)]),
        delete_character_backward: Binding::new(vec![
            (KeyCode::Backspace, KeyModifiers::NONE),
            (KeyCode::Char('h'), KeyModifiers::CONTROL),
        ]),
        delete_character_forward: Binding::new(vec![
            (KeyCode::Delete, KeyModifiers::NONE),
            (KeyCode::Char('d'), KeyModifiers::CONTROL),
        ]),
        line_start: Binding::new(vec![
            (KeyCode::Home, KeyModifiers::NONE),
            (KeyCode::Char('a'), KeyModifiers::CONTROL),
        ]),
        line_end: Binding::new(vec![
            (KeyCode::End, KeyModifiers::NONE),
            (KeyCode::Char('e'), KeyModifiers::CONTROL),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}
