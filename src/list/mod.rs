//! The list of titles shown in the filter dialog.
//!
//! This module exposes [`Model`], a list built once from an ordered sequence
//! of titles, plus the substring filter that decides which items are shown.
//!
//! ### Filtering
//! [`Model::apply_filter`] runs [`matches`] against every item and flips its
//! `hidden` flag. Items keep their identity and order; only visibility
//! changes. The cursor moves over visible items only.
//!
//! ### Scrolling
//! Rows are rendered into a [`viewport`](crate::viewport) sized to the
//! dialog body. A footer row with the match count closes the content, so the
//! overscroll clamp can pull the view back one row without hiding the last
//! item.
//!
//! ```
//! use bubbletea_listfilter::list::Model;
//!
//! let mut list = Model::new(["Apple", "Banana", "Cherry"]);
//! list.apply_filter("an");
//! assert_eq!(list.visible_texts(), vec!["Banana"]);
//! ```

mod filtering;
mod keys;
mod model;
mod rendering;
mod types;

/// Visual styling for list rows.
pub mod style;

pub use filtering::{matches, visibility};
pub use keys::ListKeyMap;
pub(crate) use rendering::truncate;
pub use model::Model;
pub use style::ListStyles;
pub use types::{FilterStateInfo, ListItem};

use bubbletea_rs::{KeyMsg, Msg};

impl Model {
    /// Handles navigation keys. Returns true if the key moved the cursor or
    /// was otherwise consumed.
    ///
    /// Choosing an item is left to the owner, which knows what activation
    /// means; see [`ListKeyMap::choose`].
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        let last = self.visible_len().saturating_sub(1);
        let page = self.body.client_height().max(1);

        let paging =
            self.keymap.prev_page.matches(key_msg) || self.keymap.next_page.matches(key_msg);
        let target = if self.keymap.cursor_up.matches(key_msg) {
            self.cursor.saturating_sub(1)
        } else if self.keymap.cursor_down.matches(key_msg) {
            (self.cursor + 1).min(last)
        } else if self.keymap.prev_page.matches(key_msg) {
            self.cursor.saturating_sub(page)
        } else if self.keymap.next_page.matches(key_msg) {
            (self.cursor + page).min(last)
        } else if self.keymap.go_to_start.matches(key_msg) {
            0
        } else if self.keymap.go_to_end.matches(key_msg) {
            last
        } else {
            return false;
        };

        self.set_cursor(target);
        if paging {
            self.body.clamp_overscroll();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cursor_navigation_is_bounded() {
        let mut list = Model::new(["a", "b", "c"]);
        assert!(list.update(&key(KeyCode::Up)));
        assert_eq!(list.cursor(), 0);
        list.update(&key(KeyCode::Down));
        list.update(&key(KeyCode::Down));
        list.update(&key(KeyCode::Down));
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_paging_moves_by_body_height() {
        let titles: Vec<String> = (0..20).map(|i| format!("title {i}")).collect();
        let mut list = Model::new(titles);
        list.set_size(20, 5);
        list.update(&key(KeyCode::PageDown));
        assert_eq!(list.cursor(), 5);
        assert!(list.body().scroll_top() > 0);
        list.update(&key(KeyCode::PageUp));
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.body().scroll_top(), 0);
    }

    #[test]
    fn test_jump_keys() {
        let mut list = Model::new(["a", "b", "c", "d"]);
        let end: Msg = Box::new(KeyMsg {
            key: KeyCode::End,
            modifiers: KeyModifiers::CONTROL,
        });
        list.update(&end);
        assert_eq!(list.selected_item().map(|i| i.text()), Some("d"));
    }

    #[test]
    fn test_typed_characters_are_not_consumed() {
        let mut list = Model::new(["a"]);
        assert!(!list.update(&key(KeyCode::Char('j'))));
        assert!(!list.update(&key(KeyCode::Enter)));
    }
}
