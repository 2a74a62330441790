//! Single-line text input used for the filter field and the mirror field.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_listfilter::textinput::new;
//!
//! let mut input = new();
//! input.set_placeholder("Type to filter...");
//! input.set_width(30);
//!
//! input.focus();
//! input.set_value("ban");
//! assert_eq!(input.value(), "ban");
//! assert_eq!(input.position(), 3);
//! ```
//!
//! Input only changes while the field is focused. `update` reports whether
//! the value changed so the owner can react (the widget re-runs its filter).

pub mod keymap;
pub mod methods;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
