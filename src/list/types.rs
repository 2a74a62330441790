//! Core types for list components.

use std::fmt;

/// One entry of the list, bound to the title it was created from.
///
/// The text never changes after construction. `hidden` is owned by the
/// filter engine and is the only mutable attribute.
///
/// # Examples
///
/// ```
/// use bubbletea_listfilter::list::ListItem;
///
/// let item = ListItem::new("Banana");
/// assert_eq!(item.text(), "Banana");
/// assert!(!item.hidden());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    text: String,
    hidden: bool,
}

impl ListItem {
    /// Creates a visible item with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hidden: false,
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the current filter hides this item.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub(super) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A snapshot of the filter: the query and how many items it lets through.
///
/// ```
/// use bubbletea_listfilter::list::Model;
///
/// let mut list = Model::new(["Apple", "Banana", "Cherry"]);
/// list.apply_filter("an");
///
/// let info = list.filter_state_info();
/// assert_eq!(info.query, "an");
/// assert_eq!(info.match_count, 1);
/// assert_eq!(info.total, 3);
/// assert!(info.is_filtering);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStateInfo {
    /// The query last applied.
    pub query: String,
    /// Number of items the query shows.
    pub match_count: usize,
    /// Number of items in the list.
    pub total: usize,
    /// Whether the query is non-empty.
    pub is_filtering: bool,
}
