#![forbid(unsafe_code)]

//! Offset-range to pixel-rectangle mapping.
//!
//! `rect_for` is the coordinate authority every decoration goes through.
//! It is a pure function of `(text, range, metrics)`: calling it twice with
//! unchanged inputs yields a bit-identical rectangle, which is what makes
//! cached marker rectangles comparable for validity.
//!
//! Out-of-bounds ranges produce [`Rect::ZERO`]; callers that want the
//! clamped-and-degraded behavior go through [`clamp_range`] first.

use codeglass_core::geometry::{Point, Rect};

use crate::metrics::FontMetrics;

/// Index of the line (0-based) containing the byte offset `index`.
fn line_index(text: &str, index: usize) -> usize {
    text[..index].bytes().filter(|&b| b == b'\n').count()
}

/// Byte offset of the start of the line containing `index`.
fn line_start(text: &str, index: usize) -> usize {
    text[..index].rfind('\n').map_or(0, |pos| pos + 1)
}

/// Byte offset of the end (exclusive of `\n`) of the line containing `index`.
fn line_end(text: &str, index: usize) -> usize {
    text[index..].find('\n').map_or(text.len(), |pos| index + pos)
}

/// Clamp `(index, size)` to the bounds of `text`, snapping both ends down
/// to character boundaries.
///
/// The result is always a valid range for `rect_for`. A range entirely past
/// the end of the text clamps to an empty range at the end.
pub fn clamp_range(text: &str, index: usize, size: usize) -> (usize, usize) {
    let start = floor_char_boundary(text, index.min(text.len()));
    let end = floor_char_boundary(text, index.saturating_add(size).min(text.len()));
    (start, end.saturating_sub(start))
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Pixel position of the caret for the given byte offset.
///
/// Out-of-bounds or mid-character offsets yield the origin.
pub fn caret_position(text: &str, index: usize, metrics: &FontMetrics) -> Point {
    if index > text.len() || !text.is_char_boundary(index) {
        return Point::default();
    }
    let start = line_start(text, index);
    let x = metrics.advance_of(&text[start..index], 0);
    let y = line_index(text, index) as f32 * metrics.line_height();
    Point::new(x, y)
}

/// Pixel rectangle covering `size` bytes of `text` starting at `index`.
///
/// The rectangle spans only the line containing `index`; a range that runs
/// past the end of that line is clipped at the line break. Returns
/// [`Rect::ZERO`] when the range is out of bounds or does not fall on
/// character boundaries.
pub fn rect_for(text: &str, index: usize, size: usize, metrics: &FontMetrics) -> Rect {
    let Some(end) = index.checked_add(size) else {
        return Rect::ZERO;
    };
    if end > text.len() || !text.is_char_boundary(index) || !text.is_char_boundary(end) {
        return Rect::ZERO;
    }

    let start_of_line = line_start(text, index);
    let end_of_line = line_end(text, index);
    let clipped_end = end.min(end_of_line);

    let start_col = metrics.columns_of(&text[start_of_line..index], 0);
    let x = start_col as f32 * metrics.char_advance();
    let width = metrics.advance_of(&text[index..clipped_end], start_col);
    let y = line_index(text, index) as f32 * metrics.line_height();

    Rect::new(x, y, width, metrics.line_height())
}
