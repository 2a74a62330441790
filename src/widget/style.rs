//! Styling for the widget chrome.
//!
//! ```rust
//! use bubbletea_listfilter::widget::Styles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = Styles::default();
//! styles.header = Style::new().bold(true).foreground(Color::from("212"));
//! ```

use crate::list::ListStyles;
use lipgloss_extras::prelude::*;

/// Styles for every part of the widget.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The header row.
    pub header: Style,
    /// The key help shown next to the header.
    pub help: Style,
    /// The mirror field's prompt.
    pub mirror_prompt: Style,
    /// The chosen title in the mirror field.
    pub mirror_text: Style,
    /// Placeholder text of both fields.
    pub placeholder: Style,
    /// Filter prompt once the field has focus.
    pub filter_prompt: Style,
    /// Filter prompt while the dialog is still opening.
    pub filter_prompt_opening: Style,
    /// Rows of the list.
    pub list: ListStyles,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold(true)
                .foreground(Color::from("#FFFDF5"))
                .background(Color::from("#5A56E0"))
                .padding(0, 1, 0, 1),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            mirror_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            mirror_text: Style::new().bold(true),
            placeholder: Style::new().foreground(Color::from("240")),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_prompt_opening: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            list: ListStyles::default(),
        }
    }
}
