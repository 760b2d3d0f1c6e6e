#![forbid(unsafe_code)]

//! The Codeglass overlay engine.
//!
//! A Codeglass editor overlays several visually aligned layers on a plain
//! editable text surface: a syntax layer, hoverable markers anchored to
//! character ranges, per-line lens annotations, a synthetic caret, and an
//! optional multi-offset text shadow. This crate owns the rules that keep
//! those layers consistent while text, scroll, viewport, and font size all
//! change independently:
//!
//! - [`decoration`] — marker/lens storage and the rectangle cache.
//! - [`hover`] — scroll-invariant pointer hit testing and hover transitions.
//! - [`caret`] — caret index, selection direction, and the blink machine.
//! - [`reconcile`] — shared layout state, scroll pinning, auto-resize.
//! - [`schedule`] — the per-instance debounce window for recomputation.
//! - [`compose`] — the pure `(state) -> LayerTree` projection.
//! - [`editor`] — the [`CodeEdit`](editor::CodeEdit) widget gluing it all
//!   together and presenting the host-facing surface.
//!
//! Everything is single-threaded and cooperative: timers are deadline
//! state machines polled by [`CodeEdit::tick`](editor::CodeEdit::tick)
//! with a caller-supplied `Instant`, never background threads.

pub mod caret;
pub mod compose;
pub mod config;
pub mod decoration;
pub mod editor;
pub mod highlight;
pub mod hover;
pub mod reconcile;
pub mod schedule;

pub use caret::{BLINK_QUIESCENCE, BlinkPhase, CaretState, CaretTracker};
pub use compose::{
    CARET_WIDTH, CaretLayer, ComposeInput, Layer, LayerTree, LensItem, LensLayer, MarkerLayer,
    MarkerQuad, SHADOW_SPREAD, ShadowLayer, SyntaxLayer, compose,
};
pub use config::{AttributeError, CommentSyntax, TabStyle};
pub use decoration::{DecorationRegistry, Lens, Marker};
pub use editor::{CodeEdit, EditorEvent, FOCUS_DEFER};
pub use highlight::{Highlighter, PlainHighlighter, Span, SyntaxDefinition, SyntaxRule, SyntaxSource};
pub use hover::{HitTester, HoverTransition, SurfaceGeometry};
pub use reconcile::{LayoutState, Reconciler};
pub use schedule::{DEFAULT_DEBOUNCE, UpdateScheduler};
