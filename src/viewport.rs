//! Vertically scrolling region for the modal body.
//!
//! The viewport holds pre-rendered content lines and shows `client_height` of
//! them starting at `scroll_top`. It mirrors the three numbers a scrollable
//! container exposes (`scroll_top`, `client_height`, `scroll_height`) so the
//! overscroll clamp can be stated directly in those terms.
//!
//! ```rust
//! use bubbletea_listfilter::viewport::Model;
//!
//! let mut body = Model::new(3);
//! body.set_content_lines((0..5).map(|i| format!("row {i}")).collect());
//!
//! body.scroll_down(10);
//! assert_eq!(body.scroll_top(), 2);
//! assert!(body.at_bottom());
//!
//! // Fully scrolled content gets nudged back by one row.
//! assert!(body.clamp_overscroll());
//! assert_eq!(body.scroll_top(), 1);
//! ```

/// Scrollable list of content lines.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Number of rows visible at once.
    height: usize,
    /// First visible content line.
    y_offset: usize,
    lines: Vec<String>,
}

impl Model {
    /// Creates an empty viewport showing `height` rows.
    pub fn new(height: usize) -> Self {
        Self {
            height,
            y_offset: 0,
            lines: Vec::new(),
        }
    }

    /// Replaces the content and keeps the offset within range.
    pub fn set_content_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.y_offset = self.y_offset.min(self.max_scroll_top());
    }

    /// Changes the visible height and keeps the offset within range.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.y_offset = self.y_offset.min(self.max_scroll_top());
    }

    /// Index of the first visible line.
    pub fn scroll_top(&self) -> usize {
        self.y_offset
    }

    /// Number of visible rows.
    pub fn client_height(&self) -> usize {
        self.height
    }

    /// Total number of content lines.
    pub fn scroll_height(&self) -> usize {
        self.lines.len()
    }

    /// Largest offset that still fills the viewport.
    pub fn max_scroll_top(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    /// Moves the offset, clamped to the scrollable range.
    pub fn set_scroll_top(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_scroll_top());
    }

    /// Scrolls down by `n` lines.
    pub fn scroll_down(&mut self, n: usize) {
        self.set_scroll_top(self.y_offset.saturating_add(n));
    }

    /// Scrolls up by `n` lines.
    pub fn scroll_up(&mut self, n: usize) {
        self.set_scroll_top(self.y_offset.saturating_sub(n));
    }

    /// Scrolls down one page.
    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1));
    }

    /// Scrolls up one page.
    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1));
    }

    /// Jumps to the first line.
    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    /// Returns true at the top of the content.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Returns true when the last line is visible.
    pub fn at_bottom(&self) -> bool {
        self.y_offset + self.height >= self.lines.len()
    }

    /// Nudges the offset back by one line when the content's bottom edge
    /// sits exactly on the viewport's bottom edge.
    ///
    /// Keeps a fully scrolled body from handing further scroll gestures to
    /// whatever contains it. Returns true if the offset moved.
    pub fn clamp_overscroll(&mut self) -> bool {
        if self.y_offset + self.height != self.lines.len() || self.y_offset == 0 {
            return false;
        }
        self.y_offset -= 1;
        log::trace!(
            "overscroll clamp: scroll_top {} -> {}",
            self.y_offset + 1,
            self.y_offset
        );
        true
    }

    /// Scrolls the minimum amount needed to show `line`.
    pub fn ensure_visible(&mut self, line: usize) {
        if self.height == 0 {
            return;
        }
        if line < self.y_offset {
            self.y_offset = line;
        } else if line >= self.y_offset + self.height {
            self.y_offset = line + 1 - self.height;
        }
        self.y_offset = self.y_offset.min(self.max_scroll_top());
    }

    /// The lines currently in view.
    pub fn visible_lines(&self) -> &[String] {
        let start = self.y_offset.min(self.lines.len());
        let end = (start + self.height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Maps a row inside the viewport to a content line index.
    pub fn line_at_row(&self, row: usize) -> Option<usize> {
        if row >= self.height {
            return None;
        }
        let line = self.y_offset + row;
        (line < self.lines.len()).then_some(line)
    }

    /// Renders the visible lines, padded with blank rows to the full height.
    pub fn view(&self) -> String {
        let mut rows: Vec<&str> = self.visible_lines().iter().map(String::as_str).collect();
        rows.resize(self.height, "");
        rows.join("\n")
    }
}

/// Creates a viewport showing `height` rows.
pub fn new(height: usize) -> Model {
    Model::new(height)
}
