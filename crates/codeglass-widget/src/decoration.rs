#![forbid(unsafe_code)]

//! Marker and lens storage.
//!
//! The host owns the decoration lists and supplies them wholesale on every
//! change; the registry's only jobs are ordered storage and the marker
//! rectangle cache. Cache policy:
//!
//! - Replacing the list carries a cached rectangle over only when the new
//!   marker reuses a known `key`, its `source` snapshot is unchanged, and
//!   that snapshot still matches the live text.
//! - A marker whose `source` differs from the live text (stale anchor) is
//!   recomputed against the live text on the next [`ensure_rects`] pass.
//! - Font or layout changes invalidate every cached rectangle at once.
//!
//! A marker whose range no longer fits the live text keeps a zero-area
//! rectangle: visible nowhere, hit-testable nowhere, self-correcting once
//! the host fixes its anchor.
//!
//! [`ensure_rects`]: DecorationRegistry::ensure_rects

use codeglass_core::geometry::Rect;
use codeglass_text::{FontMetrics, rect_for};
use rustc_hash::FxHashMap;
use tracing::trace;

/// A hoverable decoration anchored to a character range.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Host-assigned unique id. Cache carry-over is keyed on this.
    pub key: String,
    /// Start byte offset into `source`.
    pub index: usize,
    /// Length in bytes.
    pub size: usize,
    /// Full text snapshot the offsets were computed against.
    pub source: String,
    /// Style tag consumed by the theme.
    pub class: String,
    /// Cached pixel rectangle; `None` until computed or after invalidation.
    rect: Option<Rect>,
}

impl Marker {
    /// Create a marker anchored at `index..index + size` of `source`.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        index: usize,
        size: usize,
        source: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            index,
            size,
            source: source.into(),
            class: class.into(),
            rect: None,
        }
    }

    /// The cached rectangle, if one has been computed.
    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Whether the cached rectangle contains the given content-space point.
    ///
    /// Markers without a rectangle, or with a zero-area one, contain
    /// nothing.
    #[inline]
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.rect.is_some_and(|rect| rect.contains(x, y))
    }
}

/// A line-anchored inline annotation.
///
/// Lenses flow with the text (appended after their line's content), so they
/// need no pixel-rectangle cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lens {
    /// 1-based line number the lens is appended to.
    pub line: u32,
    /// Annotation text.
    pub message: String,
}

impl Lens {
    /// Create a lens for the given 1-based line.
    #[must_use]
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Ordered storage for the host's markers and lenses.
#[derive(Debug, Clone, Default)]
pub struct DecorationRegistry {
    markers: Vec<Marker>,
    lenses: Vec<Lens>,
}

impl DecorationRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers in host-supplied order. Hit testing iterates this order.
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Lenses in host-supplied order.
    #[inline]
    pub fn lenses(&self) -> &[Lens] {
        &self.lenses
    }

    /// Look up a marker by key.
    pub fn marker(&self, key: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.key == key)
    }

    /// Replace the marker list wholesale.
    ///
    /// Cached rectangles survive for markers whose key existed before with
    /// the same `source` snapshot, provided that snapshot matches
    /// `live_text`. Everything else recomputes lazily. Returns the keys
    /// that are new to the registry, in list order, so the widget can emit
    /// creation events.
    pub fn replace_markers(&mut self, mut incoming: Vec<Marker>, live_text: &str) -> Vec<String> {
        let prior: FxHashMap<&str, &Marker> =
            self.markers.iter().map(|m| (m.key.as_str(), m)).collect();

        let mut created = Vec::new();
        for marker in &mut incoming {
            match prior.get(marker.key.as_str()) {
                Some(old)
                    if old.source == marker.source
                        && old.index == marker.index
                        && old.size == marker.size
                        && marker.source == live_text =>
                {
                    marker.rect = old.rect;
                }
                Some(_) => {}
                None => created.push(marker.key.clone()),
            }
        }

        self.markers = incoming;
        created
    }

    /// Replace the lens list wholesale.
    pub fn replace_lenses(&mut self, lenses: Vec<Lens>) {
        self.lenses = lenses;
    }

    /// Drop every cached rectangle. Called when font metrics or layout
    /// change, since every rectangle is wrong at once.
    pub fn invalidate_rects(&mut self) {
        for marker in &mut self.markers {
            marker.rect = None;
        }
    }

    /// Compute rectangles for markers that lack a valid one.
    ///
    /// Anchors are always resolved against `live_text`: a stale `source`
    /// only means the cache could not be trusted, not that the marker is
    /// dropped. Ranges that no longer fit yield the zero rectangle.
    pub fn ensure_rects(&mut self, live_text: &str, metrics: &FontMetrics) {
        for marker in &mut self.markers {
            if marker.rect.is_some() && marker.source == live_text {
                continue;
            }
            let rect = rect_for(live_text, marker.index, marker.size, metrics);
            if rect.is_empty() {
                trace!(key = %marker.key, "marker range unresolvable, zero-area rect");
            }
            // A stale-source marker fails the validity check above on every
            // pass, so it keeps recomputing until the host corrects its
            // snapshot. That is the intended degraded mode, not a leak.
            marker.rect = Some(rect);
        }
    }
}
