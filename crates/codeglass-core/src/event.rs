#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host adapts its platform's raw pointer, wheel, and selection events
//! into these types before feeding them to the overlay engine. All events
//! derive `Clone` and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are in *client* space; the hit tester translates
//!   them into content space using the surface origin and scroll offsets.
//! - `Modifiers` use bitflags for easy combination.
//! - Selection offsets are byte offsets into the surface's text value.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a pointer or wheel event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Whether any zoom-qualifying modifier (Ctrl or Super) is held.
    #[must_use]
    pub const fn is_zoom_qualifier(&self) -> bool {
        self.contains(Modifiers::CTRL) || self.contains(Modifiers::SUPER)
    }
}

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in client space.
    pub x: f32,

    /// Y coordinate in client space.
    pub y: f32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a plain move event (the common case for hover tracking).
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved over the surface.
    Moved,

    /// Pointer button pressed down.
    Down(PointerButton),

    /// Pointer button released.
    Up(PointerButton),

    /// Pointer left the surface entirely.
    Exited,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,

    /// Secondary (usually right) button.
    Secondary,

    /// Auxiliary (usually middle/wheel) button.
    Auxiliary,
}

/// A wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Horizontal scroll delta.
    pub delta_x: f32,

    /// Vertical scroll delta. Positive scrolls content down.
    pub delta_y: f32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Create a new wheel event.
    #[must_use]
    pub const fn new(delta_x: f32, delta_y: f32) -> Self {
        Self {
            delta_x,
            delta_y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a wheel event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Direction in which the user last grew an active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionDirection {
    /// Selection extended toward higher offsets.
    Forward,

    /// Selection extended toward lower offsets.
    Backward,

    /// No active selection (collapsed caret).
    #[default]
    None,
}

/// The text surface's current selection range.
///
/// Offsets are byte offsets into the surface's value, `start <= end`.
/// A collapsed caret is `start == end` with direction `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start offset (inclusive).
    pub start: usize,

    /// End offset (exclusive).
    pub end: usize,

    /// Direction the selection last grew in.
    pub direction: SelectionDirection,
}

impl SelectionRange {
    /// Create a new selection range.
    #[must_use]
    pub const fn new(start: usize, end: usize, direction: SelectionDirection) -> Self {
        Self {
            start,
            end,
            direction,
        }
    }

    /// Create a collapsed caret at the given offset.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self::new(offset, offset, SelectionDirection::None)
    }

    /// Whether the range is collapsed (no selected text).
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// The offset the caret visually sits at: the moving endpoint of an
    /// active selection, or the collapsed position.
    #[must_use]
    pub const fn active_offset(&self) -> usize {
        match self.direction {
            SelectionDirection::Backward => self.start,
            _ => self.end,
        }
    }
}
