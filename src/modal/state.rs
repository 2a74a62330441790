//! The two-state dialog machine.

/// Whether the filter dialog is showing.
///
/// ```text
/// Closed --open--> Open
/// Open --close--> Closed
/// ```
///
/// Both transitions are total and idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// The dialog is hidden.
    #[default]
    Closed,
    /// The dialog is showing.
    Open,
}

impl State {
    /// The state after opening.
    #[must_use]
    pub const fn open(self) -> Self {
        State::Open
    }

    /// The state after closing.
    #[must_use]
    pub const fn close(self) -> Self {
        State::Closed
    }

    /// Whether the dialog is drawn.
    pub const fn is_visible(self) -> bool {
        matches!(self, State::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(State::default(), State::Closed);
        assert!(!State::default().is_visible());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let open = State::Closed.open();
        assert_eq!(open, State::Open);
        assert_eq!(open.open(), State::Open);

        let closed = open.close();
        assert_eq!(closed, State::Closed);
        assert_eq!(closed.close(), State::Closed);
    }
}
