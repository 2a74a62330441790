//! Type-safe key bindings shared by every component in the crate.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown
//! for them. Components keep their bindings in a key map struct and
//! implement [`KeyMap`] so the widget can render contextual help.
//!
//! ```rust
//! use bubbletea_listfilter::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "choose");
//! let wipe = Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+u", "clear");
//!
//! let msg = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert!(confirm.matches(&msg));
//! assert!(!wipe.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Returns true if `msg` is this key combination.
    ///
    /// A press declared without modifiers also accepts SHIFT, since terminals
    /// report shifted characters (`G`, `?`) with the SHIFT bit set.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers.is_empty() {
            return msg.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        }
        self.modifiers == msg.modifiers
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the keys do, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys with empty help.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Returns true if the binding is enabled and `msg` is one of its keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Returns true if `msg` matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by key map structs so their bindings can be shown as help.
pub trait KeyMap {
    /// Bindings for the one-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as `key desc • key desc`, skipping disabled ones.
pub fn short_help_view(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
