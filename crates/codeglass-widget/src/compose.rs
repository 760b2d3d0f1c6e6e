#![forbid(unsafe_code)]

//! The layer-tree projection.
//!
//! [`compose`] is a pure function from current state to the ordered overlay
//! layers; it mutates nothing and schedules nothing, which is what makes
//! the render path independently testable. Layer z-order is fixed:
//!
//! `syntax < shadow < lenses < markers < caret`
//!
//! The surface's native caret is always suppressed in favor of the
//! synthetic caret layer so the host can style it.

use codeglass_core::geometry::Rect;
use codeglass_text::{FontMetrics, caret_position};
use smallvec::SmallVec;

use crate::caret::{BlinkPhase, CaretState};
use crate::decoration::DecorationRegistry;
use crate::highlight::Span;

/// Width of the synthetic caret in pixels.
pub const CARET_WIDTH: f32 = 2.0;

/// Sub-pixel offset between shadow duplicates.
pub const SHADOW_SPREAD: f32 = 0.5;

/// The ordered overlay layers for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTree {
    /// Layers bottom-up; z-order is the vector order.
    pub layers: Vec<Layer>,
    /// Always `true`: the plain surface's own caret stays transparent.
    pub suppress_native_caret: bool,
}

/// One overlay layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Syntax-highlighted render of the last debounced text.
    Syntax(SyntaxLayer),
    /// Blur-shadow duplicates (present only when the effect is enabled).
    Shadow(ShadowLayer),
    /// Line-flow lens annotations.
    Lenses(LensLayer),
    /// Pixel-anchored marker quads.
    Markers(MarkerLayer),
    /// The synthetic caret.
    Caret(CaretLayer),
}

/// The syntax layer: the text the spans were computed from, plus the spans.
///
/// During a debounce burst this lags the live value by design; it catches
/// up when the scheduler fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxLayer {
    /// Text snapshot the spans index into.
    pub text: String,
    /// Styled spans in source order.
    pub spans: Vec<Span>,
}

/// Up to nine text duplicates on a 3×3 sub-pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowLayer {
    /// Pixel offsets of each duplicate, row-major over the grid.
    pub offsets: SmallVec<[(f32, f32); 9]>,
}

impl ShadowLayer {
    fn grid() -> Self {
        let mut offsets = SmallVec::new();
        for dy in [-SHADOW_SPREAD, 0.0, SHADOW_SPREAD] {
            for dx in [-SHADOW_SPREAD, 0.0, SHADOW_SPREAD] {
                offsets.push((dx, dy));
            }
        }
        Self { offsets }
    }
}

/// A lens placed after its line's content.
#[derive(Debug, Clone, PartialEq)]
pub struct LensItem {
    /// 1-based source line.
    pub line: u32,
    /// Annotation text.
    pub message: String,
    /// X pixel position: one column past the line's last character.
    pub x: f32,
    /// Y pixel position of the line's top.
    pub y: f32,
}

/// The lens layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LensLayer {
    /// Positioned lenses; lenses pointing past the last line are omitted.
    pub items: Vec<LensItem>,
}

/// A marker quad ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerQuad {
    /// Host key of the marker.
    pub key: String,
    /// Content-space rectangle.
    pub rect: Rect,
    /// Style tag.
    pub class: String,
    /// Whether this marker currently owns the hover.
    pub hovered: bool,
}

/// The markers layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerLayer {
    /// Paintable quads in registry order; zero-area markers are omitted.
    pub items: Vec<MarkerQuad>,
}

/// The synthetic caret layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CaretLayer {
    /// Caret rectangle in content space.
    pub rect: Rect,
    /// Current blink phase.
    pub phase: BlinkPhase,
}

/// Everything [`compose`] reads. All borrowed; composing copies only what
/// the layers need to own.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    /// Live text value (caret, markers, lenses position against this).
    pub text: &'a str,
    /// Text snapshot the current spans were computed from.
    pub highlighted_text: &'a str,
    /// Spans from the last debounced highlight run.
    pub spans: &'a [Span],
    /// Shared font metrics.
    pub metrics: &'a FontMetrics,
    /// Current decorations. Rectangles must already be ensured.
    pub registry: &'a DecorationRegistry,
    /// Derived caret state.
    pub caret: CaretState,
    /// Key of the hovered marker, if any.
    pub hovered: Option<&'a str>,
    /// Whether the blur-shadow effect is enabled.
    pub shadow: bool,
}

/// Project current state into the ordered layer tree.
pub fn compose(input: ComposeInput<'_>) -> LayerTree {
    let mut layers = Vec::with_capacity(5);

    layers.push(Layer::Syntax(SyntaxLayer {
        text: input.highlighted_text.to_string(),
        spans: input.spans.to_vec(),
    }));

    if input.shadow {
        layers.push(Layer::Shadow(ShadowLayer::grid()));
    }

    layers.push(Layer::Lenses(compose_lenses(input.text, input.metrics, input.registry)));
    layers.push(Layer::Markers(compose_markers(input.registry, input.hovered)));

    let origin = caret_position(input.text, input.caret.index, input.metrics);
    layers.push(Layer::Caret(CaretLayer {
        rect: Rect::new(origin.x, origin.y, CARET_WIDTH, input.metrics.line_height()),
        phase: input.caret.blink_phase,
    }));

    LayerTree {
        layers,
        suppress_native_caret: true,
    }
}

fn compose_lenses(text: &str, metrics: &FontMetrics, registry: &DecorationRegistry) -> LensLayer {
    let lines: Vec<&str> = text.split('\n').collect();
    let items = registry
        .lenses()
        .iter()
        .filter_map(|lens| {
            let line_idx = (lens.line as usize).checked_sub(1)?;
            let content = lines.get(line_idx)?;
            let cols = metrics.columns_of(content, 0);
            Some(LensItem {
                line: lens.line,
                message: lens.message.clone(),
                // One column of breathing room after the line content.
                x: (cols + 1) as f32 * metrics.char_advance(),
                y: line_idx as f32 * metrics.line_height(),
            })
        })
        .collect();
    LensLayer { items }
}

fn compose_markers(registry: &DecorationRegistry, hovered: Option<&str>) -> MarkerLayer {
    let items = registry
        .markers()
        .iter()
        .filter_map(|marker| {
            let rect = marker.rect()?;
            if rect.is_empty() {
                return None;
            }
            Some(MarkerQuad {
                key: marker.key.clone(),
                rect,
                class: marker.class.clone(),
                hovered: hovered == Some(marker.key.as_str()),
            })
        })
        .collect();
    MarkerLayer { items }
}
