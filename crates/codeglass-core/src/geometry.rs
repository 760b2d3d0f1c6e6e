#![forbid(unsafe_code)]

//! Pixel-space geometric primitives.
//!
//! All coordinates are CSS-pixel floats with the origin at the top-left of
//! the rendering surface. Rectangles are half-open: a point on the right or
//! bottom edge is outside.

/// A point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle for decoration anchoring and hit testing.
///
/// A zero-area rectangle is the neutral "nowhere" value: it contains no
/// point and is returned wherever a measurement cannot be made.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero rectangle.
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Empty rectangles contain nothing, including their own origin.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        !self.is_empty() && x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Return the rectangle shifted by the given offsets.
    #[must_use]
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn contains_respects_half_open_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(39.9, 59.9));
        assert!(!rect.contains(40.0, 20.0));
        assert!(!rect.contains(10.0, 60.0));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 10.0);
        assert!(rect.is_empty());
        assert!(!rect.contains(5.0, 5.0));
        assert!(Rect::ZERO.is_empty());
    }

    #[test]
    fn translated_moves_origin_only() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let moved = rect.translated(0.5, -1.0);
        assert_eq!(moved, Rect::new(1.5, 1.0, 3.0, 4.0));
    }
}
