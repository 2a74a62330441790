//! View rendering functions for list components.

use super::style::{CURSOR_MARKER, ELLIPSIS};
use super::Model;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `width` columns, ending in an ellipsis when cut.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if width == 0 || text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

impl Model {
    /// Renders one row per visible item plus the footer row.
    pub(super) fn render_rows(&self) -> Vec<String> {
        let text_width = self.width.saturating_sub(CURSOR_MARKER.width());
        let mut rows: Vec<String> = self
            .items
            .iter()
            .filter(|item| !item.hidden())
            .enumerate()
            .map(|(ordinal, item)| {
                let text = truncate(item.text(), text_width);
                if ordinal == self.cursor {
                    self.styles
                        .cursor_item
                        .render(&format!("{}{}", CURSOR_MARKER, text))
                } else {
                    let pad = " ".repeat(CURSOR_MARKER.width());
                    self.styles.item.render(&format!("{}{}", pad, text))
                }
            })
            .collect();
        rows.push(self.footer_view(rows.len()));
        rows
    }

    fn footer_view(&self, visible: usize) -> String {
        if visible == 0 {
            return self.styles.no_items.render("  No matches.");
        }
        let noun = if self.items.len() == 1 {
            &self.item_singular
        } else {
            &self.item_plural
        };
        self.styles
            .status
            .render(&format!("  {} of {} {}", visible, self.items.len(), noun))
    }

    /// Renders the rows currently in view, padded to the body height.
    pub fn view(&self) -> String {
        self.body.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Banana", 10), "Banana");
        assert_eq!(truncate("Banana", 4), "Ban…");
        assert_eq!(truncate("Banana", 0), "Banana");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_rows_mark_cursor_and_count() {
        let mut list = Model::new(["Apple", "Banana", "Cherry"]);
        list.set_item_names("title", "titles");
        list.set_cursor(1);
        let rows: Vec<String> = list.render_rows().iter().map(|r| plain(r)).collect();
        assert_eq!(
            rows,
            vec!["  Apple", "> Banana", "  Cherry", "  3 of 3 titles"]
        );
    }

    #[test]
    fn test_rows_skip_hidden_items() {
        let mut list = Model::new(["Apple", "Banana", "Cherry"]);
        list.apply_filter("an");
        let rows: Vec<String> = list.render_rows().iter().map(|r| plain(r)).collect();
        assert_eq!(rows, vec!["> Banana", "  1 of 3 items"]);

        list.apply_filter("zzz");
        let rows: Vec<String> = list.render_rows().iter().map(|r| plain(r)).collect();
        assert_eq!(rows, vec!["  No matches."]);
    }
}
