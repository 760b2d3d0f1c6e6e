#![forbid(unsafe_code)]

//! Layout reconciliation: shared scroll state and auto-resize.
//!
//! The input surface and every overlay layer must agree on scroll offsets
//! and content height after each reconciliation pass. The reconciler is the
//! single writer for those fields: scroll reported by either side lands in
//! one [`LayoutState`] that both sides read in the same event turn, so no
//! two renders can observe them disagreeing.
//!
//! Height recomputation is deferred: text and attribute changes only flag a
//! pending measure, and the widget flushes it at the end of the current
//! update cycle so a burst of edits collapses into one measurement. The
//! measured value is written back only when it actually differs from the
//! last applied one, which is what keeps a resize from re-entering its own
//! reconciliation pass.

use codeglass_text::{FontMetrics, measure_content};
use tracing::debug;

/// Layout fields shared between the input surface and overlay container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    /// Current font size in pixels (mirrors the widget's metrics).
    pub font_size: f32,
    /// Whether the container tracks full-content height.
    pub auto_resize: bool,
    /// Last applied content height, pixels. Zero until first measure.
    pub content_height: f32,
    /// Horizontal scroll offset, pixels.
    pub scroll_left: f32,
    /// Vertical scroll offset, pixels.
    pub scroll_top: f32,
}

/// Keeps [`LayoutState`] consistent between surface and overlays.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    layout: LayoutState,
    measure_pending: bool,
}

impl Reconciler {
    /// Create a reconciler with default layout state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current shared layout state.
    #[inline]
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// Current scroll offsets as `(left, top)`.
    #[inline]
    pub fn scroll(&self) -> (f32, f32) {
        (self.layout.scroll_left, self.layout.scroll_top)
    }

    /// Enable or disable auto-resize. Enabling schedules a measure so the
    /// height catches up with content that changed while it was off.
    pub fn set_auto_resize(&mut self, auto_resize: bool) {
        if self.layout.auto_resize != auto_resize {
            self.layout.auto_resize = auto_resize;
            self.measure_pending = auto_resize;
        }
    }

    /// Record the font size the layers are currently using.
    pub fn set_font_size(&mut self, font_size: f32) {
        self.layout.font_size = font_size;
    }

    /// Flag that content (or metrics) changed and height must be
    /// re-measured at the end of the cycle.
    pub fn note_content_changed(&mut self) {
        self.measure_pending = true;
    }

    /// Whether a measure is waiting to be flushed.
    #[inline]
    pub fn measure_pending(&self) -> bool {
        self.measure_pending
    }

    /// Pin both sides to the given scroll offsets.
    ///
    /// Called with scroll reported by the surface *or* set programmatically
    /// on the widget; either way the shared state updates synchronously in
    /// the same turn. Returns `true` if the offsets changed.
    pub fn pin_scroll(&mut self, left: f32, top: f32) -> bool {
        if self.layout.scroll_left == left && self.layout.scroll_top == top {
            return false;
        }
        self.layout.scroll_left = left;
        self.layout.scroll_top = top;
        true
    }

    /// Flush a pending measure against the current text and metrics.
    ///
    /// Returns `true` if the applied content height changed. With
    /// auto-resize off the pending flag is consumed without measuring.
    pub fn flush_measure(&mut self, text: &str, metrics: &FontMetrics) -> bool {
        if !self.measure_pending {
            return false;
        }
        self.measure_pending = false;
        if !self.layout.auto_resize {
            return false;
        }

        let measured = measure_content(text, metrics).height;
        if measured == self.layout.content_height {
            // Unchanged height writes nothing, so the resize cannot
            // re-trigger itself.
            return false;
        }
        debug!(
            from = self.layout.content_height,
            to = measured,
            "content height reconciled"
        );
        self.layout.content_height = measured;
        true
    }
}
