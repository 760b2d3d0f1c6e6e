#![forbid(unsafe_code)]

//! Text measurement for the Codeglass overlay editor.
//!
//! The overlay layers are only believable if every one of them agrees, to
//! the pixel, on where each character sits. This crate is the single place
//! that opinion lives: a monospace font-metrics table plus the mapping from
//! byte-offset ranges in the text value to pixel rectangles, and the
//! full-content mirror measurement that drives auto-resize.

pub mod mapper;
pub mod metrics;
pub mod mirror;

pub use mapper::{caret_position, clamp_range, rect_for};
pub use metrics::FontMetrics;
pub use mirror::{ContentSize, measure_content};
