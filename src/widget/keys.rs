//! Key bindings for opening and closing the filter dialog.

use crate::key;
use crate::list::ListKeyMap;
use crossterm::event::{KeyCode, KeyModifiers};

/// Widget-level key bindings. List navigation lives in [`ListKeyMap`], and
/// editing keys in [`crate::textinput::KeyMap`].
///
/// While the dialog is open, any key not bound here or in the list goes to
/// the filter field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Opens the dialog while it is closed.
    pub open: key::Binding,
    /// Closes the dialog. While the filter field has focus this is its blur.
    pub close: key::Binding,
    /// Quits the program.
    pub force_quit: key::Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            open: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char('/')])
                .with_help("enter", "open"),
            close: key::Binding::new(vec![KeyCode::Esc, KeyCode::Tab]).with_help("esc", "close"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        }
    }
}

impl KeyMap {
    /// Help for the closed widget.
    pub fn closed_help(&self) -> Vec<&key::Binding> {
        vec![&self.open, &self.force_quit]
    }

    /// Help while the dialog is showing.
    pub fn open_help<'a>(&'a self, list: &'a ListKeyMap) -> Vec<&'a key::Binding> {
        vec![&list.cursor_up, &list.cursor_down, &list.choose, &self.close]
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.closed_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.open, &self.close, &self.force_quit]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_views() {
        let km = KeyMap::default();
        assert_eq!(
            key::short_help_view(&key::KeyMap::short_help(&km)),
            "enter open • ctrl+c quit"
        );
        assert_eq!(
            key::short_help_view(&km.open_help(&ListKeyMap::default())),
            "↑ up • ↓ down • enter choose • esc close"
        );
        assert_eq!(key::KeyMap::full_help(&km)[0].len(), 3);
    }
}
