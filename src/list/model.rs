//! Main Model struct and core functionality for list components.

use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{FilterStateInfo, ListItem};
use crate::viewport;

/// The list of titles shown in the dialog body.
///
/// Items are created once, in order, and never added, removed or reordered.
/// Filtering only flips their `hidden` flag. The cursor is an ordinal over
/// the visible items, and the body viewport scrolls over the rendered rows:
/// one row per visible item followed by a footer row with the match count.
///
/// # Examples
///
/// ```
/// use bubbletea_listfilter::list::Model;
///
/// let list = Model::new(["Apple", "Banana", "Cherry"]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.selected_item().map(|i| i.text()), Some("Apple"));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) items: Vec<ListItem>,
    pub(super) query: String,
    pub(super) cursor: usize,
    pub(super) body: viewport::Model,
    pub(super) width: usize,
    pub(super) styles: ListStyles,
    pub(super) keymap: ListKeyMap,
    pub(super) item_singular: String,
    pub(super) item_plural: String,
}

impl Model {
    /// Creates one item per title, preserving order. An empty sequence gives
    /// an empty list.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<ListItem> = titles.into_iter().map(ListItem::new).collect();
        log::debug!("list initialized with {} items", items.len());
        let mut list = Self {
            items,
            query: String::new(),
            cursor: 0,
            body: viewport::new(10),
            width: 0,
            styles: ListStyles::default(),
            keymap: ListKeyMap::default(),
            item_singular: "item".to_string(),
            item_plural: "items".to_string(),
        };
        list.refresh();
        list
    }

    /// Sets the area the list renders into. A width of 0 disables
    /// truncation.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.body.set_height(height);
        self.refresh();
        self.body.ensure_visible(self.cursor);
    }

    /// Sets the nouns used in the footer, e.g. `("title", "titles")`.
    pub fn set_item_names(&mut self, singular: &str, plural: &str) {
        self.item_singular = singular.to_string();
        self.item_plural = plural.to_string();
        self.refresh();
    }

    /// Replaces the styles.
    pub fn set_styles(&mut self, styles: ListStyles) {
        self.styles = styles;
        self.refresh();
    }

    /// Returns the key bindings.
    pub fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    /// All items, hidden or not, in their original order.
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Original indices of the visible items, in order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.hidden())
            .map(|(i, _)| i)
            .collect()
    }

    /// Texts of the visible items, in order.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| !item.hidden())
            .map(ListItem::text)
            .collect()
    }

    /// Number of visible items.
    pub fn visible_len(&self) -> usize {
        self.items.iter().filter(|item| !item.hidden()).count()
    }

    /// The query last passed to `apply_filter`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Summarizes the current filter.
    pub fn filter_state_info(&self) -> FilterStateInfo {
        FilterStateInfo {
            query: self.query.clone(),
            match_count: self.visible_len(),
            total: self.items.len(),
            is_filtering: !self.query.is_empty(),
        }
    }

    /// Cursor position among the visible items.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the visible items, and scrolls it into
    /// view.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.visible_len().saturating_sub(1));
        self.body.ensure_visible(self.cursor);
        self.refresh();
    }

    /// Original index of the item under the cursor.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_indices().get(self.cursor).copied()
    }

    /// The item under the cursor, if any item is visible.
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.selected_index().map(|i| &self.items[i])
    }

    /// Maps a row of the list region to the original index of the item
    /// drawn there. Rows past the last item, including the footer, map to
    /// nothing.
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        let line = self.body.line_at_row(row)?;
        self.visible_indices().get(line).copied()
    }

    /// The body viewport.
    pub fn body(&self) -> &viewport::Model {
        &self.body
    }

    /// Scrolls the body by `delta` rows (negative is up), then applies the
    /// overscroll clamp.
    pub fn scroll(&mut self, delta: isize) {
        if delta < 0 {
            self.body.scroll_up(delta.unsigned_abs());
        } else {
            self.body.scroll_down(delta.unsigned_abs());
        }
        self.body.clamp_overscroll();
    }

    /// Re-renders the rows into the body.
    pub(super) fn refresh(&mut self) {
        let rows = self.render_rows();
        self.body.set_content_lines(rows);
    }
}
