//! Key bindings for list navigation.
//!
//! Plain letters are left unbound: while the dialog is open, typed
//! characters belong to the filter field.
//!
//! - **Cursor Movement**: `↑/ctrl+p` (up), `↓/ctrl+n` (down)
//! - **Page Navigation**: `pgup`, `pgdn`
//! - **Jump Navigation**: `ctrl+home`, `ctrl+end`
//! - **Choose**: `enter`

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for moving through the list and choosing an item.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move selection up one item.
    pub cursor_up: key::Binding,
    /// Move selection down one item.
    pub cursor_down: key::Binding,
    /// Move selection up one page.
    pub prev_page: key::Binding,
    /// Move selection down one page.
    pub next_page: key::Binding,
    /// Jump to the first item.
    pub go_to_start: key::Binding,
    /// Jump to the last item.
    pub go_to_end: key::Binding,
    /// Choose the item under the cursor.
    pub choose: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![
                (KeyCode::Up, KeyModifiers::NONE),
                (KeyCode::Char('p'), KeyModifiers::CONTROL),
            ])
            .with_help("↑", "up"),
            cursor_down: key::Binding::new(vec![
                (KeyCode::Down, KeyModifiers::NONE),
                (KeyCode::Char('n'), KeyModifiers::CONTROL),
            ])
            .with_help("↓", "down"),
            prev_page: key::Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            next_page: key::Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "next page"),
            go_to_start: key::Binding::new(vec![(KeyCode::Home, KeyModifiers::CONTROL)])
                .with_help("ctrl+home", "go to start"),
            go_to_end: key::Binding::new(vec![(KeyCode::End, KeyModifiers::CONTROL)])
                .with_help("ctrl+end", "go to end"),
            choose: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "choose"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.choose]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down, &self.choose],
            vec![
                &self.prev_page,
                &self.next_page,
                &self.go_to_start,
                &self.go_to_end,
            ],
        ]
    }
}
