#![forbid(unsafe_code)]

//! Core primitives for the Codeglass overlay editor.
//!
//! This crate holds the leaf types shared by every other Codeglass crate:
//! pixel-space geometry and the canonical input/event vocabulary exchanged
//! between the host's text surface and the overlay engine.
//!
//! Time is re-exported from `web-time` so that deadline arithmetic works
//! identically on native and wasm targets.

pub mod event;
pub mod geometry;

pub use event::{
    Modifiers, PointerButton, PointerEvent, PointerEventKind, SelectionDirection, SelectionRange,
    WheelEvent,
};
pub use geometry::{Point, Rect};

/// Monotonic clock used for all deadline state machines.
pub use web_time::{Duration, Instant};
