//! Rendering.

use super::model::Model;
use crate::key;
use crate::layout::Region;
use crate::list::truncate;
use lipgloss_extras::lipgloss;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rendered text placed at a screen column.
#[derive(Debug, Clone)]
struct Span {
    x: usize,
    width: usize,
    text: String,
}

impl Span {
    fn new(x: usize, text: String) -> Self {
        let width = lipgloss::width_visible(&text);
        Self { x, width, text }
    }

    fn end(&self) -> usize {
        self.x + self.width
    }

    /// Screen columns `from..to` of this span. The cut loses styling.
    fn cut(&self, from: usize, to: usize) -> Option<Span> {
        let from = from.max(self.x);
        let to = to.min(self.end());
        if from >= to {
            return None;
        }
        let mut col = self.x;
        let mut out = String::new();
        for ch in lipgloss::strip_ansi(&self.text).chars() {
            let w = ch.width().unwrap_or(0);
            if col >= from && col + w <= to {
                out.push(ch);
            }
            col += w;
            if col >= to {
                break;
            }
        }
        Some(Span::new(from, out))
    }
}

/// One screen row. Later spans cover earlier ones where they overlap.
#[derive(Debug, Clone, Default)]
struct Row {
    spans: Vec<Span>,
}

impl Row {
    fn place(&mut self, span: Span) {
        if span.width == 0 {
            return;
        }
        let mut kept = Vec::with_capacity(self.spans.len() + 2);
        for old in self.spans.drain(..) {
            if old.end() <= span.x || old.x >= span.end() {
                kept.push(old);
                continue;
            }
            kept.extend(old.cut(old.x, span.x));
            kept.extend(old.cut(span.end(), old.end()));
        }
        kept.push(span);
        self.spans = kept;
    }

    fn render(mut self) -> String {
        self.spans.sort_by_key(|s| s.x);
        let mut out = String::new();
        let mut col = 0;
        for span in self.spans {
            out.push_str(&" ".repeat(span.x.saturating_sub(col)));
            col = span.end();
            out.push_str(&span.text);
        }
        out
    }
}

impl Model {
    /// Renders every region at its place in the layout. The dialog regions
    /// are drawn only while the dialog is open.
    pub fn view(&self) -> String {
        let mut canvas = vec![Row::default(); self.layout.height() as usize];
        self.paint(&mut canvas, Region::Header, &self.header_view());
        self.paint(&mut canvas, Region::MirrorInput, &self.mirror.view());
        if self.state.is_visible() {
            self.paint(&mut canvas, Region::FilterField, &self.filter.view());
            self.paint(&mut canvas, Region::List, &self.list.view());
        }
        canvas
            .into_iter()
            .map(Row::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Places `content` inside the region, one line per row, cut to the
    /// region's width.
    fn paint(&self, canvas: &mut [Row], region: Region, content: &str) {
        let area = self.layout.get(region);
        let width = area.width as usize;
        for (offset, line) in content.split('\n').take(area.height as usize).enumerate() {
            let Some(row) = canvas.get_mut(area.y as usize + offset) else {
                break;
            };
            let text = if lipgloss::width_visible(line) > width {
                truncate(&lipgloss::strip_ansi(line), width)
            } else {
                line.to_string()
            };
            row.place(Span::new(area.x as usize, text));
        }
    }

    /// The header text followed by help for the current state.
    fn header_view(&self) -> String {
        let styles = &self.config.styles;
        let width = self.layout.get(Region::Header).width as usize;

        // Two columns of header padding.
        let title = truncate(&self.config.header, width.saturating_sub(2).max(1));
        let mut out = styles.header.render(&title);

        let bindings = if self.state.is_visible() {
            self.keymap.open_help(self.list.keymap())
        } else {
            self.keymap.closed_help()
        };
        let room = width.saturating_sub(title.width() + 4);
        if room > 0 {
            let help = truncate(&key::short_help_view(&bindings), room);
            out.push_str("  ");
            out.push_str(&styles.help.render(&help));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(spans: &[(usize, &str)]) -> String {
        let mut row = Row::default();
        for (x, text) in spans {
            row.place(Span::new(*x, text.to_string()));
        }
        row.render()
    }

    #[test]
    fn test_spans_on_one_row_keep_their_columns() {
        assert_eq!(row(&[(0, "Titles"), (10, "Selected")]), "Titles    Selected");
        assert_eq!(row(&[(10, "Selected"), (0, "Titles")]), "Titles    Selected");
    }

    #[test]
    fn test_later_span_covers_overlap() {
        assert_eq!(row(&[(0, "abcdefgh"), (2, "XY")]), "abXYefgh");
        assert_eq!(row(&[(0, "abc"), (1, "WXYZ")]), "aWXYZ");
    }

    #[test]
    fn test_cut_counts_columns() {
        let span = Span::new(0, "日本語".to_string());
        assert_eq!(span.width, 6);
        assert_eq!(span.cut(0, 4).map(|s| s.text), Some("日本".to_string()));
        assert_eq!(span.cut(2, 6).map(|s| (s.x, s.text)), Some((2, "本語".to_string())));
        assert!(span.cut(6, 9).is_none());
    }
}
