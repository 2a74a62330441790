//! Styling for list rows.
//!
//! ```rust
//! use bubbletea_listfilter::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.cursor_item = Style::new().bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Marker drawn before the row under the cursor.
pub const CURSOR_MARKER: &str = "> ";

/// Unicode ellipsis character (…) for truncated titles.
pub const ELLIPSIS: &str = "…";

/// Styles for the rows of the list.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// A row that is not under the cursor.
    pub item: Style,
    /// The row under the cursor.
    pub cursor_item: Style,
    /// The footer row with the match count.
    pub status: Style,
    /// The footer row when nothing matches.
    pub no_items: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            cursor_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
