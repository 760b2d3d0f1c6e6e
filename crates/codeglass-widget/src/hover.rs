#![forbid(unsafe_code)]

//! Pointer hit testing and hover transitions.
//!
//! Pointer events arrive in client coordinates. They are translated into
//! content space by subtracting the surface origin and adding the current
//! scroll offsets, which makes hit testing scroll-invariant: a marker under
//! the pointer stays hit while the content scrolls beneath it only if the
//! pointer actually remains over its glyphs.
//!
//! Markers are probed in registry order and the first containing rectangle
//! wins. This is a documented, deterministic tie-break (not paint order):
//! when markers overlap, the earlier list entry owns the hover even if a
//! later one is painted on top.

use codeglass_core::geometry::Point;
use smallvec::SmallVec;
use tracing::trace;

use crate::decoration::{DecorationRegistry, Marker};

/// Where the mounted text surface sits in client space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceGeometry {
    /// Top-left corner of the surface's bounding box, in client space.
    pub origin: Point,
    /// Visible viewport width in pixels.
    pub width: f32,
    /// Visible viewport height in pixels.
    pub height: f32,
}

impl SurfaceGeometry {
    /// Create a surface geometry.
    #[must_use]
    pub const fn new(origin: Point, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }
}

/// A hover boundary crossing.
///
/// When the pointer moves from one marker to another, the previous marker's
/// `Left` is emitted before the next marker's `Entered` — the two are never
/// hovered simultaneously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTransition {
    /// The pointer left this marker.
    Left(String),
    /// The pointer entered this marker.
    Entered(String),
}

/// Tracks which marker (if any) the pointer is over.
#[derive(Debug, Clone, Default)]
pub struct HitTester {
    hovered: Option<String>,
}

impl HitTester {
    /// Create a hit tester with no hover.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the currently hovered marker, if any.
    #[inline]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Find the marker under a content-space point: first rectangle match
    /// in registry order, or `None`.
    pub fn hit_test<'a>(registry: &'a DecorationRegistry, x: f32, y: f32) -> Option<&'a Marker> {
        registry.markers().iter().find(|marker| marker.hit(x, y))
    }

    /// Process a pointer move sampled at client coordinates.
    ///
    /// Returns the hover transitions this sample caused, `Left` before
    /// `Entered`. Rapid movement across adjacent markers produces a full
    /// enter/leave pair for every marker a sample actually lands on.
    pub fn pointer_move(
        &mut self,
        registry: &DecorationRegistry,
        client_x: f32,
        client_y: f32,
        geometry: &SurfaceGeometry,
        scroll: (f32, f32),
    ) -> SmallVec<[HoverTransition; 2]> {
        let x = client_x - geometry.origin.x + scroll.0;
        let y = client_y - geometry.origin.y + scroll.1;
        let hit = Self::hit_test(registry, x, y).map(|marker| marker.key.clone());
        self.transition_to(hit)
    }

    /// The pointer left the surface: clear any hover.
    pub fn pointer_exit(&mut self) -> SmallVec<[HoverTransition; 2]> {
        self.transition_to(None)
    }

    fn transition_to(&mut self, next: Option<String>) -> SmallVec<[HoverTransition; 2]> {
        let mut transitions = SmallVec::new();
        if self.hovered == next {
            return transitions;
        }
        if let Some(previous) = self.hovered.take() {
            trace!(marker = %previous, "hover leave");
            transitions.push(HoverTransition::Left(previous));
        }
        if let Some(entered) = next {
            trace!(marker = %entered, "hover enter");
            transitions.push(HoverTransition::Entered(entered.clone()));
            self.hovered = Some(entered);
        }
        transitions
    }
}
