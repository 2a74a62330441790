//! Construction-time settings for the widget.

use super::style::Styles;
use crate::modal::DEFAULT_FOCUS_DELAY;
use std::time::Duration;

/// Settings for [`Model::with_config`](super::Model::with_config).
///
/// ```rust
/// use bubbletea_listfilter::widget::Config;
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_header("Books")
///     .with_item_noun("book", "books")
///     .with_focus_delay(Duration::from_millis(250));
/// assert_eq!(config.focus_delay, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Time between opening the dialog and focusing its filter field.
    pub focus_delay: Duration,
    /// Text of the header row.
    pub header: String,
    /// Prompt before the filter field.
    pub filter_prompt: String,
    /// Shown in the empty filter field.
    pub filter_placeholder: String,
    /// Prompt before the mirror field.
    pub mirror_prompt: String,
    /// Shown in the mirror field before anything is chosen.
    pub mirror_placeholder: String,
    /// Noun for one item in the match count.
    pub item_singular: String,
    /// Noun for several items in the match count.
    pub item_plural: String,
    /// Visual styles.
    pub styles: Styles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_delay: DEFAULT_FOCUS_DELAY,
            header: "Titles".to_string(),
            filter_prompt: "Filter: ".to_string(),
            filter_placeholder: "type to filter".to_string(),
            mirror_prompt: "Selected: ".to_string(),
            mirror_placeholder: "nothing chosen yet".to_string(),
            item_singular: "title".to_string(),
            item_plural: "titles".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Config {
    /// Sets the focus delay.
    pub fn with_focus_delay(mut self, delay: Duration) -> Self {
        self.focus_delay = delay;
        self
    }

    /// Sets the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the filter prompt and placeholder.
    pub fn with_filter_prompt(
        mut self,
        prompt: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        self.filter_prompt = prompt.into();
        self.filter_placeholder = placeholder.into();
        self
    }

    /// Sets the mirror prompt and placeholder.
    pub fn with_mirror_prompt(
        mut self,
        prompt: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        self.mirror_prompt = prompt.into();
        self.mirror_placeholder = placeholder.into();
        self
    }

    /// Sets the nouns used in the match count, e.g. `("book", "books")`.
    pub fn with_item_noun(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.item_singular = singular.into();
        self.item_plural = plural.into();
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }
}
