//! Substring filtering for list components.
//!
//! Matching is a plain case fold: both sides are lower-cased and the query
//! must appear as a contiguous substring of the item text. There is no
//! locale-aware normalization and no fuzzy scoring. The empty query matches
//! every item.

use super::Model;

/// Returns true if `query` occurs in `text`, ignoring case.
///
/// ```
/// use bubbletea_listfilter::list::matches;
///
/// assert!(matches("AN", "Banana"));
/// assert!(matches("", "Cherry"));
/// assert!(!matches("an", "Apple"));
/// ```
pub fn matches(query: &str, text: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Decides visibility for each text, in order.
///
/// The query is folded once and reused for every item.
pub fn visibility<'a, I>(query: &str, texts: I) -> Vec<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    texts
        .into_iter()
        .map(|text| text.to_lowercase().contains(&needle))
        .collect()
}

impl Model {
    /// Runs the filter over every item and updates their `hidden` flags.
    ///
    /// Each call is a full pass; nothing is cached between keystrokes. The
    /// cursor and scroll position go back to the top so the first match is
    /// in view. Returns the number of visible items.
    ///
    /// ```
    /// use bubbletea_listfilter::list::Model;
    ///
    /// let mut list = Model::new(["Apple", "Banana", "Cherry"]);
    /// assert_eq!(list.apply_filter("an"), 1);
    /// assert_eq!(list.visible_texts(), vec!["Banana"]);
    /// assert_eq!(list.apply_filter(""), 3);
    /// ```
    pub fn apply_filter(&mut self, query: &str) -> usize {
        let shown = visibility(query, self.items.iter().map(|item| item.text()));
        for (item, show) in self.items.iter_mut().zip(shown) {
            item.set_hidden(!show);
        }
        self.query = query.to_string();
        self.cursor = 0;
        self.body.goto_top();
        self.refresh();

        let visible = self.visible_len();
        log::debug!(
            "filter {:?}: {} of {} items visible",
            query,
            visible,
            self.items.len()
        );
        visible
    }
}
