//! Core model implementation for the textinput component.

use super::keymap::{default_key_map, KeyMap};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// A single-line text field.
///
/// The value is stored as characters so the cursor position is a character
/// index and multi-byte input edits cleanly.
///
/// # Examples
///
/// ```rust
/// use bubbletea_listfilter::textinput::new;
///
/// let mut input = new();
/// input.prompt = "Filter: ".to_string();
/// input.set_char_limit(20);
/// input.set_value("cherry");
/// assert_eq!(input.value(), "cherry");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the value text.
    pub text_style: Style,
    /// Text shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style for the cell under the cursor while focused.
    pub cursor_style: Style,
    /// Editing key bindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    /// Maximum number of columns shown; 0 shows everything.
    pub(super) width: usize,
    /// Maximum number of characters accepted; 0 means no limit.
    pub(super) char_limit: usize,
    /// First character shown when the value is wider than `width`.
    pub(super) offset: usize,
}

/// Creates an unfocused, empty text input with a `"> "` prompt.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        key_map: default_key_map(),
        value: Vec::new(),
        focus: false,
        pos: 0,
        width: 0,
        char_limit: 0,
        offset: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg);
        None
    }

    fn view(&self) -> String {
        self.view()
    }
}
