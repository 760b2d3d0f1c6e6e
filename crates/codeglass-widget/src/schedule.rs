#![forbid(unsafe_code)]

//! Per-instance debounced update scheduling.
//!
//! Raw input events arrive at arbitrary frequency; recomputing the syntax
//! layer and auto-resize on every keystroke would do the same work many
//! times over with intermediate values nobody sees. The scheduler coalesces
//! a burst into one trailing-edge execution: every trigger pushes the
//! deadline out by the debounce window, and the work runs once the window
//! elapses with no further triggers.
//!
//! The executed closure reads state at execution time, so the run always
//! sees the latest value, never the one from the first trigger of the
//! burst. The final trigger of a burst is never dropped: its deadline stays
//! armed until some poll observes it due. A running guard refuses re-entry,
//! so an execution that manages to re-trigger the scheduler can never nest
//! a second execution inside itself.

use codeglass_core::{Duration, Instant};
use tracing::trace;

/// Default debounce window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(16);

/// Trailing-edge debouncer for one widget instance.
#[derive(Debug, Clone)]
pub struct UpdateScheduler {
    window: Duration,
    deadline: Option<Instant>,
    running: bool,
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl UpdateScheduler {
    /// Create a scheduler with the given debounce window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            running: false,
        }
    }

    /// The configured debounce window.
    #[inline]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a qualifying change. Restarts the single owned deadline;
    /// earlier deadlines from the same burst are simply overwritten, so no
    /// orphaned timers accumulate.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Whether an execution is scheduled and not yet run.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Run `work` if the debounce window has elapsed.
    ///
    /// Returns `Some` with the work's result when it ran, `None` when
    /// nothing was due (or an execution is already in flight).
    pub fn run_due<R>(&mut self, now: Instant, work: impl FnOnce() -> R) -> Option<R> {
        if self.running {
            return None;
        }
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.running = true;
        trace!("debounced update firing");
        let result = work();
        self.running = false;
        Some(result)
    }
}
