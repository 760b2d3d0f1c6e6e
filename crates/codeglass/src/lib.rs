#![forbid(unsafe_code)]

//! Codeglass public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts
//! embedding the overlay editor. It re-exports common types from the
//! internal crates and offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use codeglass_core::event::{
    Modifiers, PointerButton, PointerEvent, PointerEventKind, SelectionDirection, SelectionRange,
    WheelEvent,
};
pub use codeglass_core::geometry::{Point, Rect};
pub use codeglass_core::{Duration, Instant};

// --- Text re-exports -------------------------------------------------------

pub use codeglass_text::{ContentSize, FontMetrics, caret_position, measure_content, rect_for};

// --- Widget re-exports -----------------------------------------------------

pub use codeglass_widget::{
    BlinkPhase, CodeEdit, CommentSyntax, EditorEvent, Highlighter, Layer, LayerTree, Lens, Marker,
    PlainHighlighter, Span, SurfaceGeometry, SyntaxDefinition, SyntaxRule, SyntaxSource, TabStyle,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CodeEdit, EditorEvent, FontMetrics, Highlighter, Instant, Layer, LayerTree, Lens, Marker,
        PointerEvent, Rect, SelectionRange, SurfaceGeometry, WheelEvent,
    };

    pub use crate::{core, text, widget};
}

pub use codeglass_core as core;
pub use codeglass_text as text;
pub use codeglass_widget as widget;
