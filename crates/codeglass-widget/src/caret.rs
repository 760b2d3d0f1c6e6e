#![forbid(unsafe_code)]

//! Caret derivation and the blink state machine.
//!
//! The caret is derived from the text surface's selection range on every
//! selection-change or input event; the host never writes caret state
//! directly. Blink is modeled without a persistent timer tick: each range
//! update stamps an instant, and the phase is computed on demand from how
//! long the caret has been quiescent. Rearming is just restamping, so no
//! orphaned timers can accumulate.

use codeglass_core::event::{SelectionDirection, SelectionRange};
use codeglass_core::{Duration, Instant};

/// Quiescence delay before the caret starts blinking.
pub const BLINK_QUIESCENCE: Duration = Duration::from_millis(500);

/// Whether the synthetic caret is currently in its blink animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlinkPhase {
    /// Solid caret: a range update happened within the quiescence delay.
    #[default]
    None,
    /// Blinking caret: the caret has been still long enough.
    Blink,
}

/// Snapshot of derived caret state for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretState {
    /// Byte offset the caret sits at.
    pub index: usize,
    /// Direction the user last grew an active selection.
    pub shift_direction: SelectionDirection,
    /// Current blink phase.
    pub blink_phase: BlinkPhase,
}

/// Derives caret state from surface selection reports.
#[derive(Debug, Clone, Default)]
pub struct CaretTracker {
    index: usize,
    shift_direction: SelectionDirection,
    last_update: Option<Instant>,
}

impl CaretTracker {
    /// Create a tracker with the caret at offset zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current caret byte offset.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Ingest the surface's current range, or `None` when the surface
    /// reports no active range (e.g. unfocused).
    ///
    /// A missing range leaves every field at its last known value — no
    /// forced reset, so transient focus loss cannot make the caret
    /// flicker. Any actual range report restarts the blink quiescence
    /// clock, even if the offsets are unchanged.
    pub fn on_selection(&mut self, range: Option<SelectionRange>, now: Instant) {
        let Some(range) = range else {
            return;
        };
        self.index = range.active_offset();
        self.shift_direction = if range.is_collapsed() {
            SelectionDirection::None
        } else {
            match range.direction {
                // A live selection with an unreported direction reads as
                // forward growth.
                SelectionDirection::None => SelectionDirection::Forward,
                direction => direction,
            }
        };
        self.last_update = Some(now);
    }

    /// Blink phase at `now`: `Blink` once the caret has been quiescent for
    /// [`BLINK_QUIESCENCE`], `None` before that or before any range update.
    pub fn blink_phase(&self, now: Instant) -> BlinkPhase {
        match self.last_update {
            Some(stamp) if now.saturating_duration_since(stamp) >= BLINK_QUIESCENCE => {
                BlinkPhase::Blink
            }
            _ => BlinkPhase::None,
        }
    }

    /// Snapshot the derived state for rendering.
    #[must_use]
    pub fn state(&self, now: Instant) -> CaretState {
        CaretState {
            index: self.index,
            shift_direction: self.shift_direction,
            blink_phase: self.blink_phase(now),
        }
    }
}
