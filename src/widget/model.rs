//! Widget state and the operations that change it.

use super::config::Config;
use super::keys::KeyMap;
use crate::layout::{Layout, Region};
use crate::list;
use crate::modal::{self, DeferredFocus, FocusFilterMsg};
use crate::textinput;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use unicode_width::UnicodeWidthStr;

/// A list of titles with a modal filter dialog and a field that mirrors the
/// chosen title.
///
/// # Examples
///
/// ```rust
/// use bubbletea_listfilter::layout::Layout;
/// use bubbletea_listfilter::widget::Model;
///
/// let mut widget = Model::new(["Apple", "Banana", "Cherry"], Layout::default());
/// let _focus_cmd = widget.open_modal();
/// assert!(widget.is_open());
///
/// widget.set_filter("an");
/// assert_eq!(widget.list().visible_texts(), vec!["Banana"]);
///
/// widget.activate(1);
/// assert_eq!(widget.selected_value(), "Banana");
/// assert!(!widget.is_open());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) list: list::Model,
    pub(super) filter: textinput::Model,
    pub(super) mirror: textinput::Model,
    pub(super) state: modal::State,
    pub(super) focus: DeferredFocus,
    pub(super) layout: Layout,
    pub(super) config: Config,
    pub(super) keymap: KeyMap,
    /// Region under the last mouse press, for telling where a drag began.
    pub(super) press_origin: Option<Region>,
}

impl Model {
    /// Creates the widget with default settings.
    pub fn new<I, S>(titles: I, layout: Layout) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(titles, layout, Config::default())
    }

    /// Creates the widget with one list item per title, in order.
    pub fn with_config<I, S>(titles: I, layout: Layout, config: Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let styles = &config.styles;

        let mut list = list::Model::new(titles);
        list.set_item_names(&config.item_singular, &config.item_plural);
        list.set_styles(styles.list.clone());

        let mut filter = textinput::new();
        filter.prompt = config.filter_prompt.clone();
        filter.prompt_style = styles.filter_prompt.clone();
        filter.placeholder = config.filter_placeholder.clone();
        filter.placeholder_style = styles.placeholder.clone();

        let mut mirror = textinput::new();
        mirror.prompt = config.mirror_prompt.clone();
        mirror.prompt_style = styles.mirror_prompt.clone();
        mirror.text_style = styles.mirror_text.clone();
        mirror.placeholder = config.mirror_placeholder.clone();
        mirror.placeholder_style = styles.placeholder.clone();

        let mut widget = Self {
            list,
            filter,
            mirror,
            state: modal::State::default(),
            focus: DeferredFocus::new(config.focus_delay),
            layout,
            config,
            keymap: KeyMap::default(),
            press_origin: None,
        };
        widget.apply_layout();
        widget
    }

    /// Shows the dialog and returns the command that focuses the filter
    /// field once the focus delay has passed. Any earlier pending focus is
    /// superseded.
    pub fn open_modal(&mut self) -> Cmd {
        self.state = self.state.open();
        if !self.filter.focused() {
            self.filter.prompt_style = self.config.styles.filter_prompt_opening.clone();
        }
        log::debug!(
            "filter dialog opened, focusing filter in {:?}",
            self.focus.delay()
        );
        self.focus.schedule()
    }

    /// Hides the dialog, drops any pending focus and blurs the filter field.
    pub fn close_modal(&mut self) {
        if self.state.is_visible() {
            log::debug!("filter dialog closed");
        }
        self.state = self.state.close();
        self.focus.cancel();
        self.filter.blur();
    }

    /// Reacts to the filter field losing focus. Equivalent to
    /// [`close_modal`](Self::close_modal).
    pub fn filter_blurred(&mut self) {
        self.close_modal();
    }

    /// Copies the text of the item at `index` into the mirror field and
    /// closes the dialog. Indices past the end are ignored.
    pub fn activate(&mut self, index: usize) {
        let Some(item) = self.list.items().get(index) else {
            log::debug!("ignoring activation of missing item {}", index);
            return;
        };
        let text = item.text().to_string();
        log::debug!("activated item {}: {:?}", index, text);
        self.mirror.set_value(&text);
        self.close_modal();
    }

    /// Replaces the filter text and re-runs the filter.
    pub fn set_filter(&mut self, query: &str) {
        self.filter.set_value(query);
        self.list.apply_filter(query);
    }

    /// Focuses the filter field if `msg` is the current deferred focus and
    /// the dialog is still open. Returns true if focus moved.
    pub fn handle_focus(&mut self, msg: &FocusFilterMsg) -> bool {
        if !self.focus.accept(msg) || !self.state.is_visible() {
            return false;
        }
        self.focus_filter();
        log::debug!("filter field focused");
        true
    }

    /// Focuses the filter field right away.
    pub(super) fn focus_filter(&mut self) {
        self.focus.cancel();
        self.filter.focus();
        self.filter.prompt_style = self.config.styles.filter_prompt.clone();
    }

    /// Replaces the layout.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.apply_layout();
    }

    /// Lays the widget out for a screen of the given size. An unusable size
    /// keeps the current layout.
    pub fn resize(&mut self, width: u16, height: u16) {
        match Layout::for_size(width, height) {
            Ok(layout) => self.set_layout(layout),
            Err(err) => log::warn!("keeping previous layout: {}", err),
        }
    }

    fn apply_layout(&mut self) {
        let list_area = self.layout.get(Region::List);
        self.list
            .set_size(list_area.width as usize, list_area.height as usize);

        let filter_width = self.layout.get(Region::FilterField).width as usize;
        self.filter
            .set_width(filter_width.saturating_sub(self.filter.prompt.width()).max(1));

        let mirror_width = self.layout.get(Region::MirrorInput).width as usize;
        self.mirror
            .set_width(mirror_width.saturating_sub(self.mirror.prompt.width()).max(1));
    }

    /// Current dialog state.
    pub fn state(&self) -> modal::State {
        self.state
    }

    /// Returns true while the dialog is showing.
    pub fn is_open(&self) -> bool {
        self.state.is_visible()
    }

    /// Returns true between opening the dialog and focusing its filter.
    pub fn focus_pending(&self) -> bool {
        self.focus.is_pending()
    }

    /// The mirror field's value: the last activated title.
    pub fn selected_value(&self) -> String {
        self.mirror.value()
    }

    /// The filter field.
    pub fn filter(&self) -> &textinput::Model {
        &self.filter
    }

    /// The mirror field.
    pub fn mirror(&self) -> &textinput::Model {
        &self.mirror
    }

    /// The list inside the dialog.
    pub fn list(&self) -> &list::Model {
        &self.list
    }

    /// The current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The settings the widget was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Widget-level key bindings.
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::<String>::new(), Layout::default()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.dispatch(&msg).cmd
    }

    fn view(&self) -> String {
        self.view()
    }
}
