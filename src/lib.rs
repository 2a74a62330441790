#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-listfilter/")]

//! # bubbletea-listfilter
//!
//! A title picker for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a list of titles, a modal dialog with a filter field that
//! narrows the list as you type, and a field that mirrors the chosen title.
//!
//! ## Overview
//!
//! The widget follows the Elm Architecture. [`widget::Model`] implements
//! `bubbletea_rs::Model`, so it can run on its own, and also exposes
//! [`dispatch`](widget::Model::dispatch) for hosts that embed it and need to
//! know whether a message should skip their default handling.
//!
//! ## Components
//!
//! - [`widget`]: the assembled list filter
//! - [`list`]: the titles, the substring filter and the cursor
//! - [`modal`]: dialog state and the cancellable deferred focus
//! - [`textinput`]: single-line input for the filter and mirror fields
//! - [`viewport`]: the scrollable dialog body and its overscroll clamp
//! - [`layout`]: validated screen regions
//! - [`key`]: key bindings and help text
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_listfilter::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     picker: ListFilter,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let picker = ListFilter::new(["Dune", "Emma", "Ulysses"], Layout::default());
//!         (Self { picker }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.picker.dispatch(&msg).cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         self.picker.view()
//!     }
//! }
//! ```

pub mod error;
pub mod key;
pub mod layout;
pub mod list;
pub mod modal;
pub mod textinput;
pub mod viewport;
pub mod widget;

use bubbletea_rs::Cmd;

/// Focus management shared by input components.
///
/// ```rust
/// use bubbletea_listfilter::prelude::*;
///
/// let mut input = textinput_new();
/// assert!(!input.focused());
///
/// input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use error::{Error, Result};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use layout::{Layout, LayoutBuilder, Rect, Region};
pub use list::{FilterStateInfo, ListItem, ListKeyMap, ListStyles, Model as List};
pub use modal::{DeferredFocus, FocusFilterMsg, State as ModalState};
pub use textinput::{
    default_key_map as textinput_default_key_map, new as textinput_new,
    KeyMap as TextInputKeyMap, Model as TextInput,
};
pub use viewport::Model as Viewport;
pub use widget::{
    Config as ListFilterConfig, Dispatch, KeyMap as ListFilterKeyMap, Model as ListFilter,
    Styles as ListFilterStyles,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_listfilter::prelude::*;
///
/// let widget = ListFilter::new(["Apple", "Banana"], Layout::default());
/// assert_eq!(widget.state(), ModalState::Closed);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::layout::{Layout, Rect, Region};
    pub use crate::list::{ListItem, Model as List};
    pub use crate::modal::{FocusFilterMsg, State as ModalState};
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::widget::{Config as ListFilterConfig, Dispatch, Model as ListFilter};
    pub use crate::Component;
}
