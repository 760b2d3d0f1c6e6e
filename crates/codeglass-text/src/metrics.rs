#![forbid(unsafe_code)]

//! Monospace font-metrics table.
//!
//! The visible text surface and every overlay layer must share one set of
//! font measurements, otherwise decoration rectangles drift off their
//! characters. [`FontMetrics`] is that shared table: character advance and
//! line height derived from the font size, with grapheme-cluster and tab
//! awareness.
//!
//! Widths are counted in columns first (CJK and emoji clusters occupy two,
//! tabs expand to the next tab stop) and converted to pixels once, so two
//! measurements of the same text can never disagree by rounding.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Minimum font size in CSS pixels. Wheel zoom clamps here.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Font size change per wheel-zoom step.
pub const FONT_SIZE_STEP: f32 = 0.5;

/// Shared font measurements for the surface and all overlay layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    font_size: f32,
    /// Character cell width as a fraction of the font size.
    advance_ratio: f32,
    /// Line height as a fraction of the font size.
    line_height_ratio: f32,
    /// Columns per tab stop.
    tab_size: u16,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            advance_ratio: 0.5,
            line_height_ratio: 1.5,
            tab_size: 2,
        }
    }
}

impl FontMetrics {
    /// Create metrics for the given font size with default ratios.
    #[must_use]
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size: font_size.max(MIN_FONT_SIZE),
            ..Self::default()
        }
    }

    /// Set the tab stop width in columns (builder).
    #[must_use]
    pub fn with_tab_size(mut self, tab_size: u16) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    /// Set the advance ratio (builder). Hosts that measured their actual
    /// font can feed the real ratio here.
    #[must_use]
    pub fn with_advance_ratio(mut self, ratio: f32) -> Self {
        self.advance_ratio = ratio;
        self
    }

    /// Set the line-height ratio (builder).
    #[must_use]
    pub fn with_line_height_ratio(mut self, ratio: f32) -> Self {
        self.line_height_ratio = ratio;
        self
    }

    /// Current font size in pixels.
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Current tab stop width in columns.
    #[inline]
    pub fn tab_size(&self) -> u16 {
        self.tab_size
    }

    /// Width of one character cell in pixels.
    #[inline]
    pub fn char_advance(&self) -> f32 {
        self.font_size * self.advance_ratio
    }

    /// Height of one line in pixels.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.font_size * self.line_height_ratio
    }

    /// Replace the font size, clamping at [`MIN_FONT_SIZE`].
    ///
    /// Returns `true` if the applied size differs from the previous one.
    pub fn set_font_size(&mut self, font_size: f32) -> bool {
        let clamped = font_size.max(MIN_FONT_SIZE);
        if clamped == self.font_size {
            return false;
        }
        self.font_size = clamped;
        true
    }

    /// Apply one wheel-zoom step. `delta_y > 0` zooms out.
    ///
    /// Returns `true` if the font size changed (it may not, at the floor).
    pub fn zoom_step(&mut self, delta_y: f32) -> bool {
        if delta_y == 0.0 {
            return false;
        }
        let step = if delta_y > 0.0 {
            -FONT_SIZE_STEP
        } else {
            FONT_SIZE_STEP
        };
        self.set_font_size(self.font_size + step)
    }

    /// Number of columns occupied by `fragment` when it starts at
    /// `start_col`. Tabs expand to the next tab stop; wide clusters occupy
    /// two columns. `fragment` must not contain newlines.
    pub fn columns_of(&self, fragment: &str, start_col: usize) -> usize {
        let mut col = start_col;
        for grapheme in fragment.graphemes(true) {
            col += self.grapheme_columns(grapheme, col);
        }
        col - start_col
    }

    /// Columns occupied by a single grapheme cluster at the given column.
    pub fn grapheme_columns(&self, grapheme: &str, col: usize) -> usize {
        if grapheme == "\t" {
            let tab = self.tab_size as usize;
            tab - (col % tab)
        } else {
            grapheme.width()
        }
    }

    /// Pixel advance of `fragment` starting at `start_col`.
    #[inline]
    pub fn advance_of(&self, fragment: &str, start_col: usize) -> f32 {
        self.columns_of(fragment, start_col) as f32 * self.char_advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_derive_from_font_size() {
        let m = FontMetrics::new(10.0);
        assert_eq!(m.char_advance(), 5.0);
        assert_eq!(m.line_height(), 15.0);
    }

    #[test]
    fn tabs_expand_to_next_stop() {
        let m = FontMetrics::new(10.0).with_tab_size(4);
        // Tab at column 0 jumps to column 4.
        assert_eq!(m.columns_of("\t", 0), 4);
        // Tab at column 2 only fills to the next stop.
        assert_eq!(m.columns_of("\t", 2), 2);
        assert_eq!(m.columns_of("a\tb", 0), 5);
    }

    #[test]
    fn wide_clusters_take_two_columns() {
        let m = FontMetrics::new(10.0);
        assert_eq!(m.columns_of("漢字", 0), 4);
        assert_eq!(m.columns_of("ab", 0), 2);
    }

    #[test]
    fn zoom_steps_and_clamps() {
        let mut m = FontMetrics::new(1.5);
        assert!(m.zoom_step(1.0));
        assert_eq!(m.font_size(), 1.0);
        // Already at the floor: zooming out further is a no-op.
        assert!(!m.zoom_step(1.0));
        assert_eq!(m.font_size(), 1.0);
        assert!(m.zoom_step(-1.0));
        assert_eq!(m.font_size(), 1.5);
    }

    #[test]
    fn zero_delta_does_not_zoom() {
        let mut m = FontMetrics::new(16.0);
        assert!(!m.zoom_step(0.0));
        assert_eq!(m.font_size(), 16.0);
    }
}
