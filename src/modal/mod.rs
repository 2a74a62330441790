//! Open/closed state of the filter dialog and its deferred focus.
//!
//! The dialog has exactly two states. [`State`] models them as a value
//! owned by the widget, with `open` and `close` as pure transitions.
//!
//! Opening the dialog moves keyboard focus to the filter field only after a
//! fixed delay, so the field is not focused while the dialog is still
//! appearing. [`DeferredFocus`] schedules that delay as a tick command and
//! tags every schedule, so closing or reopening the dialog makes older
//! ticks inert.
//!
//! ```rust
//! use bubbletea_listfilter::modal::State;
//!
//! let state = State::default();
//! assert!(!state.is_visible());
//! assert!(state.open().is_visible());
//! assert!(!state.open().close().is_visible());
//! ```

mod focus;
mod state;

pub use focus::{DeferredFocus, FocusFilterMsg, DEFAULT_FOCUS_DELAY};
pub use state::State;
