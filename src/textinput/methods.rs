//! Core methods for the Model struct.

use super::model::Model;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

impl Model {
    /// Replaces the value. The cursor moves to the end if it would fall
    /// outside the new value.
    ///
    /// ```rust
    /// use bubbletea_listfilter::textinput::new;
    ///
    /// let mut input = new();
    /// input.set_value("Hello, world!");
    /// assert_eq!(input.value(), "Hello, world!");
    /// ```
    pub fn set_value(&mut self, s: &str) {
        let mut runes: Vec<char> = s.chars().collect();
        if self.char_limit > 0 {
            runes.truncate(self.char_limit);
        }
        let was_empty = self.value.is_empty();
        self.value = runes;
        if (self.pos == 0 && was_empty) || self.pos > self.value.len() {
            self.pos = self.value.len();
        }
        self.handle_overflow();
    }

    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Returns whether the input accepts keystrokes.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the input keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the number of columns the value may occupy; 0 removes the limit.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the maximum number of characters; 0 removes the limit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Handles a key message while focused.
    ///
    /// Returns true if the value changed, so callers can react to edits
    /// without diffing the value themselves.
    ///
    /// ```rust
    /// use bubbletea_listfilter::textinput::new;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut input = new();
    /// input.focus();
    ///
    /// let msg: Msg = Box::new(KeyMsg {
    ///     key: KeyCode::Char('h'),
    ///     modifiers: KeyModifiers::NONE,
    /// });
    /// assert!(input.update(&msg));
    /// assert_eq!(input.value(), "h");
    /// ```
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };

        let before = self.value.clone();
        if !self.handle_deletion_keys(key_msg) && !self.handle_movement_keys(key_msg) {
            self.handle_character_input(key_msg);
        }
        self.handle_overflow();
        self.value != before
    }

    /// Handle deletion-related key bindings. Returns true if a binding matched.
    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.pos = 0;
            self.offset = 0;
        } else if km.delete_after_cursor.matches(key_msg) {
            self.value.truncate(self.pos);
        } else {
            return false;
        }
        true
    }

    /// Handle movement-related key bindings. Returns true if a binding matched.
    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if km.character_backward.matches(key_msg) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.cursor_start();
        } else if km.line_end.matches(key_msg) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    /// Inserts a typed character (no Ctrl/Alt held). Returns true if inserted.
    fn handle_character_input(&mut self, key_msg: &KeyMsg) -> bool {
        let KeyCode::Char(ch) = key_msg.key else {
            return false;
        };
        if key_msg
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return false;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
        true
    }

    /// Keeps the cursor inside the visible window when `width` is set.
    ///
    /// The window is measured in terminal columns, so wide characters take
    /// two cells and the cursor cell past the end takes one.
    pub(super) fn handle_overflow(&mut self) {
        if self.width == 0 || self.columns(0, self.value.len()) < self.width {
            self.offset = 0;
            return;
        }
        if self.pos < self.offset {
            self.offset = self.pos;
            return;
        }
        let cursor_cell = self.value.get(self.pos).map_or(1, |c| c.width().unwrap_or(0));
        while self.offset < self.pos && self.columns(self.offset, self.pos) + cursor_cell > self.width
        {
            self.offset += 1;
        }
    }

    /// Display width of `value[from..to]`.
    pub(super) fn columns(&self, from: usize, to: usize) -> usize {
        self.value[from..to]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// End of the run of characters from `start` that fits in `width`
    /// columns.
    pub(super) fn window_end(&self, start: usize) -> usize {
        if self.width == 0 {
            return self.value.len();
        }
        let mut used = 0;
        let mut end = start;
        for ch in &self.value[start..] {
            let w = ch.width().unwrap_or(0);
            if used + w > self.width {
                break;
            }
            used += w;
            end += 1;
        }
        end
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
