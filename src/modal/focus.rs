//! Cancellable, delayed focus of the filter field.

use bubbletea_rs::{tick, Cmd, Msg};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Used to ensure that focus messages are only accepted by the timer that sent them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// How long the dialog takes to appear before the filter field is focused.
pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(500);

/// Delivered when a scheduled focus delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusFilterMsg {
    /// Identifier of the timer that scheduled this message.
    pub id: usize,
    /// Schedule generation; only the latest one is honoured.
    pub tag: usize,
}

/// A one-shot timer that can be cancelled before it fires.
///
/// Every call to [`schedule`](Self::schedule) or [`cancel`](Self::cancel)
/// advances the tag, so at most one outstanding message is ever accepted.
///
/// ```rust
/// use bubbletea_listfilter::modal::{DeferredFocus, FocusFilterMsg};
/// use std::time::Duration;
///
/// let mut timer = DeferredFocus::new(Duration::from_millis(500));
/// let _cmd = timer.schedule();
/// let fired = FocusFilterMsg { id: timer.id(), tag: timer.tag() };
///
/// timer.cancel();
/// assert!(!timer.accept(&fired));
/// ```
#[derive(Debug, Clone)]
pub struct DeferredFocus {
    delay: Duration,
    id: usize,
    tag: usize,
    pending: bool,
}

impl DeferredFocus {
    /// Creates an idle timer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            id: next_id(),
            tag: 0,
            pending: false,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Unique identifier of this timer.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Generation of the latest schedule or cancel.
    pub fn tag(&self) -> usize {
        self.tag
    }

    /// Whether a scheduled message is still expected.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Supersedes any earlier schedule and returns the tick command for a
    /// new one.
    pub fn schedule(&mut self) -> Cmd {
        self.tag += 1;
        self.pending = true;
        let id = self.id;
        let tag = self.tag;
        tick(self.delay, move |_| Box::new(FocusFilterMsg { id, tag }) as Msg)
    }

    /// Makes any outstanding message inert.
    pub fn cancel(&mut self) {
        if self.pending {
            log::trace!("deferred focus {} cancelled at tag {}", self.id, self.tag);
        }
        self.tag += 1;
        self.pending = false;
    }

    /// Consumes `msg` if it belongs to the current schedule. Returns false
    /// for stale, foreign, or repeated messages.
    pub fn accept(&mut self, msg: &FocusFilterMsg) -> bool {
        if !self.pending || msg.id != self.id || msg.tag != self.tag {
            log::trace!(
                "ignoring focus tick {}/{} (timer {}/{}, pending {})",
                msg.id,
                msg.tag,
                self.id,
                self.tag,
                self.pending
            );
            return false;
        }
        self.pending = false;
        true
    }
}

impl Default for DeferredFocus {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DELAY)
    }
}
