#![forbid(unsafe_code)]

//! Full-content mirror measurement.
//!
//! Auto-resize needs the height the content *would* occupy if nothing
//! scrolled. The original widget measured a hidden element holding the full
//! value plus one trailing space; the space keeps a final empty line from
//! collapsing. [`measure_content`] reproduces that: an empty line after a
//! terminal newline still contributes one line height, and the trailing
//! space widens the last line by one column.

use crate::metrics::FontMetrics;

/// Measured size of the full, unscrolled content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSize {
    /// Width in pixels of the widest line (including the trailing sentinel
    /// space on the last line).
    pub width: f32,
    /// Height in pixels of all lines.
    pub height: f32,
}

/// Measure the full content of `text` under the given metrics.
///
/// Empty text still measures one line high, matching a text surface that
/// always shows at least one line box.
pub fn measure_content(text: &str, metrics: &FontMetrics) -> ContentSize {
    let mut line_count = 0usize;
    let mut max_cols = 0usize;
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        line_count += 1;
        let mut cols = metrics.columns_of(line, 0);
        if lines.peek().is_none() {
            // Trailing sentinel space on the final line.
            cols += 1;
        }
        max_cols = max_cols.max(cols);
    }

    ContentSize {
        width: max_cols as f32 * metrics.char_advance(),
        height: line_count as f32 * metrics.line_height(),
    }
}
