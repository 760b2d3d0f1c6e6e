#![forbid(unsafe_code)]

//! The `CodeEdit` widget.
//!
//! `CodeEdit` wires the engine together and presents the host-facing
//! surface: attribute setters, wholesale marker/lens lists, raw event
//! ingestion, and a drained queue of emitted [`EditorEvent`]s. The host
//! drives it with three calls:
//!
//! - feed it events as they arrive (`on_input`, `on_selection`,
//!   `on_pointer`, `on_wheel`, `on_surface_scroll`),
//! - call [`tick`](CodeEdit::tick) once per frame with the current time,
//! - call [`render`](CodeEdit::render) when `tick` reports a change.
//!
//! All deferral (debounce, blink, autofocus staging) happens inside
//! `tick`; nothing here owns a thread or a timer.

use codeglass_core::event::{
    PointerEvent, PointerEventKind, SelectionRange, WheelEvent,
};
use codeglass_core::{Duration, Instant};
use codeglass_text::FontMetrics;
use tracing::debug;

use crate::caret::{BlinkPhase, CaretTracker};
use crate::compose::{ComposeInput, LayerTree, compose};
use crate::config::{CommentSyntax, TabStyle};
use crate::decoration::{DecorationRegistry, Lens, Marker};
use crate::highlight::{
    Highlighter, PlainHighlighter, Span, SyntaxDefinition, SyntaxSlot, SyntaxSource,
};
use crate::hover::{HitTester, HoverTransition, SurfaceGeometry};
use crate::reconcile::Reconciler;
use crate::schedule::UpdateScheduler;

/// Deferral before the autofocus request fires, and again before the caret
/// is placed. Avoids the host platform's focus race on initial mount.
pub const FOCUS_DEFER: Duration = Duration::from_millis(1);

/// Events the widget emits toward the host. Drained with
/// [`CodeEdit::take_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The shared scroll offsets changed (surface or programmatic).
    Scroll {
        /// New horizontal offset.
        left: f32,
        /// New vertical offset.
        top: f32,
    },
    /// A marker key appeared in the registry for the first time.
    MarkerCreated {
        /// The marker's key.
        key: String,
    },
    /// The pointer entered a marker.
    MarkerEntered {
        /// The marker's key.
        key: String,
    },
    /// The pointer left a marker.
    MarkerLeft {
        /// The marker's key.
        key: String,
    },
    /// The wheel turned while a marker owned the hover.
    MarkerWheel {
        /// The marker's key.
        key: String,
        /// Vertical wheel delta.
        delta_y: f32,
    },
    /// Autofocus wants the surface focused.
    FocusRequested,
}

/// Autofocus staging: request focus first, place the caret one deferral
/// later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusStage {
    Idle,
    Request(Instant),
    PlaceCaret(Instant),
}

/// The layered overlay editor widget.
pub struct CodeEdit {
    value: String,
    language: String,
    theme: String,
    tab_style: TabStyle,
    comments: CommentSyntax,
    auto_focus: bool,
    shadow: bool,

    metrics: FontMetrics,
    registry: DecorationRegistry,
    hit: HitTester,
    caret: CaretTracker,
    reconciler: Reconciler,
    scheduler: UpdateScheduler,
    syntax: SyntaxSlot,
    highlighter: Box<dyn Highlighter>,

    /// Text snapshot + spans from the last highlight run.
    highlighted_text: String,
    spans: Vec<Span>,

    surface: Option<SurfaceGeometry>,
    focus: FocusStage,
    last_blink: BlinkPhase,
    events: Vec<EditorEvent>,
    dirty: bool,
}

impl Default for CodeEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEdit {
    /// Create an empty editor with default attributes.
    #[must_use]
    pub fn new() -> Self {
        let metrics = FontMetrics::default();
        let mut reconciler = Reconciler::new();
        reconciler.set_font_size(metrics.font_size());
        Self {
            value: String::new(),
            language: String::new(),
            theme: String::new(),
            tab_style: TabStyle::default(),
            comments: CommentSyntax::default(),
            auto_focus: false,
            shadow: false,
            metrics,
            registry: DecorationRegistry::new(),
            hit: HitTester::new(),
            caret: CaretTracker::new(),
            reconciler,
            scheduler: UpdateScheduler::default(),
            syntax: SyntaxSlot::default(),
            highlighter: Box::new(PlainHighlighter),
            highlighted_text: String::new(),
            spans: Vec::new(),
            surface: None,
            focus: FocusStage::Idle,
            last_blink: BlinkPhase::None,
            events: Vec::new(),
            dirty: true,
        }
    }

    // --- Builder methods ---

    /// Set the initial value (builder). Highlighted immediately; debounce
    /// only applies to subsequent changes.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.reconciler.note_content_changed();
        self.rehighlight();
        self
    }

    /// Replace the syntax highlighter collaborator (builder).
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.highlighter = highlighter;
        self.rehighlight();
        self
    }

    /// Set the debounce window (builder).
    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.scheduler = UpdateScheduler::new(window);
        self
    }

    /// Enable autofocus (builder).
    #[must_use]
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Enable auto-resize (builder).
    #[must_use]
    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.reconciler.set_auto_resize(auto_resize);
        self
    }

    // --- Attributes ---

    /// Current text value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the text value. Identical text is a no-op; anything else
    /// schedules the debounced recompute and a deferred height measure.
    pub fn set_value(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        self.scheduler.trigger(now);
        self.reconciler.note_content_changed();
        self.dirty = true;
    }

    /// The surface reported an input event with its new value.
    pub fn on_input(&mut self, value: impl Into<String>, now: Instant) {
        self.set_value(value, now);
    }

    /// Current language attribute.
    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the language; routed to the syntax collaborator, schedules a
    /// re-render.
    pub fn set_language(&mut self, language: impl Into<String>, now: Instant) {
        self.language = language.into();
        self.scheduler.trigger(now);
        self.dirty = true;
    }

    /// Current theme attribute.
    #[inline]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Set the theme; schedules a re-render.
    pub fn set_theme(&mut self, theme: impl Into<String>, now: Instant) {
        self.theme = theme.into();
        self.scheduler.trigger(now);
        self.dirty = true;
    }

    /// Current tab stop width in columns.
    #[inline]
    pub fn tab_size(&self) -> u16 {
        self.metrics.tab_size()
    }

    /// Set the tab stop width. Changes text layout, so every cached marker
    /// rectangle is invalid.
    pub fn set_tab_size(&mut self, tab_size: u16, now: Instant) {
        if tab_size == self.metrics.tab_size() {
            return;
        }
        self.metrics = self.metrics.with_tab_size(tab_size);
        self.registry.invalidate_rects();
        self.reconciler.note_content_changed();
        self.scheduler.trigger(now);
        self.dirty = true;
    }

    /// Current tab style. Consumed by the text surface, stored here so the
    /// host can reflect it.
    #[inline]
    pub fn tab_style(&self) -> TabStyle {
        self.tab_style
    }

    /// Set the tab style.
    pub fn set_tab_style(&mut self, tab_style: TabStyle) {
        self.tab_style = tab_style;
    }

    /// Current comment markers.
    #[inline]
    pub fn comments(&self) -> &CommentSyntax {
        &self.comments
    }

    /// Set the tuple-encoded comment markers attribute.
    pub fn set_comments(&mut self, comments: &str) {
        self.comments = CommentSyntax::parse(comments);
    }

    /// Current font size in pixels.
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.metrics.font_size()
    }

    /// Set the font size explicitly (clamped at the 1px floor). All cached
    /// marker rectangles are invalidated.
    pub fn set_font_size(&mut self, font_size: f32, now: Instant) {
        if self.metrics.set_font_size(font_size) {
            self.after_metrics_change(now);
        }
    }

    /// Enable or disable the blur-shadow layer.
    pub fn set_shadow(&mut self, shadow: bool) {
        if self.shadow != shadow {
            self.shadow = shadow;
            self.dirty = true;
        }
    }

    /// Enable or disable auto-resize.
    pub fn set_auto_resize(&mut self, auto_resize: bool) {
        self.reconciler.set_auto_resize(auto_resize);
    }

    // --- Decorations ---

    /// Replace the marker list wholesale. Emits `MarkerCreated` for keys
    /// new to the registry.
    pub fn set_markers(&mut self, markers: Vec<Marker>) {
        let created = self.registry.replace_markers(markers, &self.value);
        for key in created {
            self.events.push(EditorEvent::MarkerCreated { key });
        }
        self.dirty = true;
    }

    /// Replace the lens list wholesale.
    pub fn set_lenses(&mut self, lenses: Vec<Lens>) {
        self.registry.replace_lenses(lenses);
        self.dirty = true;
    }

    /// The current decoration registry.
    #[inline]
    pub fn registry(&self) -> &DecorationRegistry {
        &self.registry
    }

    // --- Syntax definition injection ---

    /// Supply a syntax definition, inline or deferred.
    pub fn set_syntax(&mut self, source: SyntaxSource, now: Instant) {
        let inline = matches!(source, SyntaxSource::Inline(_));
        self.syntax.set_source(source);
        if inline {
            self.scheduler.trigger(now);
            self.dirty = true;
        }
    }

    /// Resolve a previously deferred definition. Schedules one re-render;
    /// the recompute uses the text current at execution time.
    pub fn resolve_syntax(&mut self, definition: SyntaxDefinition, now: Instant) {
        if self.syntax.resolve(definition) {
            self.scheduler.trigger(now);
            self.dirty = true;
        }
    }

    // --- Mount / surface geometry ---

    /// The surface and overlay container finished mounting at the given
    /// client geometry.
    pub fn mount(&mut self, geometry: SurfaceGeometry, now: Instant) {
        self.surface = Some(geometry);
        if self.auto_focus && self.focus == FocusStage::Idle {
            self.focus = FocusStage::Request(now + FOCUS_DEFER);
        }
        self.dirty = true;
    }

    /// The surface's client bounding box moved or resized.
    pub fn update_geometry(&mut self, geometry: SurfaceGeometry) {
        self.surface = Some(geometry);
    }

    /// Whether the surface has mounted.
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    // --- Event ingestion ---

    /// The surface reported a selection change, or `None` when it has no
    /// active range.
    pub fn on_selection(&mut self, range: Option<SelectionRange>, now: Instant) {
        self.caret.on_selection(range, now);
        self.dirty = true;
    }

    /// A pointer event over the surface.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        let transitions = match event.kind {
            PointerEventKind::Moved => {
                // Unmounted surface: no geometry to translate against, so
                // hover is neutrally absent rather than wrong.
                let Some(geometry) = self.surface else {
                    return;
                };
                self.hit.pointer_move(
                    &self.registry,
                    event.x,
                    event.y,
                    &geometry,
                    self.reconciler.scroll(),
                )
            }
            PointerEventKind::Exited => self.hit.pointer_exit(),
            PointerEventKind::Down(_) | PointerEventKind::Up(_) => return,
        };
        for transition in transitions {
            self.dirty = true;
            self.events.push(match transition {
                HoverTransition::Left(key) => EditorEvent::MarkerLeft { key },
                HoverTransition::Entered(key) => EditorEvent::MarkerEntered { key },
            });
        }
    }

    /// A wheel event over the surface.
    ///
    /// With a zoom qualifier held this steps the font size by 0.5 per
    /// event (`delta_y > 0` shrinks, floor 1px) and invalidates every
    /// cached marker rectangle. Otherwise, if a marker owns the hover, the
    /// wheel is reported to the host for that marker.
    pub fn on_wheel(&mut self, event: WheelEvent, now: Instant) {
        if event.modifiers.is_zoom_qualifier() {
            if self.metrics.zoom_step(event.delta_y) {
                debug!(font_size = self.metrics.font_size(), "wheel zoom");
                self.after_metrics_change(now);
            }
            return;
        }
        if let Some(key) = self.hit.hovered() {
            self.events.push(EditorEvent::MarkerWheel {
                key: key.to_string(),
                delta_y: event.delta_y,
            });
        }
    }

    /// The surface scrolled. Pins the overlay layers to the same offsets
    /// in the same turn and re-emits a scroll event toward the host.
    pub fn on_surface_scroll(&mut self, left: f32, top: f32) {
        self.pin_scroll(left, top);
    }

    /// Programmatic vertical scroll.
    pub fn set_scroll_top(&mut self, top: f32) {
        self.pin_scroll(self.reconciler.layout().scroll_left, top);
    }

    /// Programmatic horizontal scroll.
    pub fn set_scroll_left(&mut self, left: f32) {
        self.pin_scroll(left, self.reconciler.layout().scroll_top);
    }

    fn pin_scroll(&mut self, left: f32, top: f32) {
        if self.reconciler.pin_scroll(left, top) {
            self.dirty = true;
            self.events.push(EditorEvent::Scroll { left, top });
        }
    }

    // --- Derived read-only properties ---

    /// Horizontal scroll offset; zero while unmounted.
    pub fn scroll_left(&self) -> f32 {
        if self.surface.is_none() {
            return 0.0;
        }
        self.reconciler.layout().scroll_left
    }

    /// Vertical scroll offset; zero while unmounted.
    pub fn scroll_top(&self) -> f32 {
        if self.surface.is_none() {
            return 0.0;
        }
        self.reconciler.layout().scroll_top
    }

    /// Caret byte offset; zero while unmounted.
    pub fn caret_index(&self) -> usize {
        if self.surface.is_none() {
            return 0;
        }
        self.caret.index()
    }

    /// Last reconciled content height (auto-resize).
    pub fn content_height(&self) -> f32 {
        self.reconciler.layout().content_height
    }

    // --- Driving ---

    /// Advance all deferred work to `now`.
    ///
    /// Runs the debounced highlight recompute if its window elapsed,
    /// flushes the end-of-cycle height measure, steps the autofocus
    /// staging, and samples the blink phase. Returns `true` when the host
    /// should re-render.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = std::mem::take(&mut self.dirty);

        match self.focus {
            FocusStage::Request(at) if now >= at => {
                self.events.push(EditorEvent::FocusRequested);
                self.focus = FocusStage::PlaceCaret(now + FOCUS_DEFER);
            }
            FocusStage::PlaceCaret(at) if now >= at => {
                // Caret to the beginning, as if the surface reported a
                // collapsed range at 0.
                self.caret.on_selection(Some(SelectionRange::caret(0)), now);
                self.focus = FocusStage::Idle;
                changed = true;
            }
            _ => {}
        }

        if self.scheduler.run_due(now, || ()).is_some() {
            self.rehighlight();
            changed = true;
        }

        if !self.scheduler.is_pending() {
            changed |= self.reconciler.flush_measure(&self.value, &self.metrics);
        }

        let blink = self.caret.blink_phase(now);
        if blink != self.last_blink {
            self.last_blink = blink;
            changed = true;
        }

        changed
    }

    /// Produce the ordered overlay layers for the current state.
    ///
    /// Ensures marker rectangles first (the lazily cached ones), then
    /// projects; the projection itself is pure.
    pub fn render(&mut self, now: Instant) -> LayerTree {
        self.registry.ensure_rects(&self.value, &self.metrics);
        compose(ComposeInput {
            text: &self.value,
            highlighted_text: &self.highlighted_text,
            spans: &self.spans,
            metrics: &self.metrics,
            registry: &self.registry,
            caret: self.caret.state(now),
            hovered: self.hit.hovered(),
            shadow: self.shadow,
        })
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Internals ---

    /// Recompute the syntax layer from the *current* value.
    fn rehighlight(&mut self) {
        self.spans = self
            .highlighter
            .tokenize(&self.value, self.syntax.definition());
        self.highlighted_text.clear();
        self.highlighted_text.push_str(&self.value);
    }

    fn after_metrics_change(&mut self, now: Instant) {
        self.reconciler.set_font_size(self.metrics.font_size());
        self.registry.invalidate_rects();
        self.reconciler.note_content_changed();
        self.scheduler.trigger(now);
        self.dirty = true;
    }
}

impl std::fmt::Debug for CodeEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeEdit")
            .field("value", &self.value)
            .field("language", &self.language)
            .field("theme", &self.theme)
            .field("font_size", &self.metrics.font_size())
            .field("mounted", &self.surface.is_some())
            .field("markers", &self.registry.markers().len())
            .field("lenses", &self.registry.lenses().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::DEFAULT_DEBOUNCE;
    use codeglass_core::event::Modifiers;

    fn mounted(now: Instant) -> CodeEdit {
        let mut editor = CodeEdit::new();
        editor.mount(SurfaceGeometry::default(), now);
        editor
    }

    #[test]
    fn unmounted_reads_yield_neutral_defaults() {
        let mut editor = CodeEdit::new();
        editor.set_scroll_top(50.0);
        editor.on_selection(Some(SelectionRange::caret(3)), Instant::now());

        assert_eq!(editor.scroll_top(), 0.0);
        assert_eq!(editor.scroll_left(), 0.0);
        assert_eq!(editor.caret_index(), 0);

        editor.mount(SurfaceGeometry::default(), Instant::now());
        assert_eq!(editor.scroll_top(), 50.0);
        assert_eq!(editor.caret_index(), 3);
    }

    #[test]
    fn scroll_is_pinned_both_ways_in_the_same_turn() {
        let now = Instant::now();
        let mut editor = mounted(now);

        editor.on_surface_scroll(4.0, 120.0);
        assert_eq!(editor.scroll_top(), 120.0);
        assert_eq!(editor.scroll_left(), 4.0);

        editor.set_scroll_top(10.0);
        assert_eq!(editor.scroll_top(), 10.0);

        let events = editor.take_events();
        assert_eq!(
            events,
            vec![
                EditorEvent::Scroll { left: 4.0, top: 120.0 },
                EditorEvent::Scroll { left: 4.0, top: 10.0 },
            ]
        );
    }

    #[test]
    fn duplicate_scroll_reports_emit_nothing() {
        let now = Instant::now();
        let mut editor = mounted(now);
        editor.on_surface_scroll(0.0, 10.0);
        editor.take_events();
        editor.on_surface_scroll(0.0, 10.0);
        assert!(editor.take_events().is_empty());
    }

    #[test]
    fn modifier_wheel_zooms_and_invalidates_rects() {
        let now = Instant::now();
        let mut editor = mounted(now);
        editor.set_value("abc", now);
        editor.set_markers(vec![Marker::new("m", 0, 2, "abc", "x")]);
        editor.render(now);
        assert!(editor.registry().marker("m").unwrap().rect().is_some());

        editor.on_wheel(
            WheelEvent::new(0.0, 1.0).with_modifiers(Modifiers::CTRL),
            now,
        );
        assert_eq!(editor.font_size(), 15.5);
        assert!(editor.registry().marker("m").unwrap().rect().is_none());
    }

    #[test]
    fn zoom_clamps_at_one_pixel() {
        let now = Instant::now();
        let mut editor = mounted(now);
        editor.set_font_size(1.2, now);
        editor.on_wheel(
            WheelEvent::new(0.0, 3.0).with_modifiers(Modifiers::SUPER),
            now,
        );
        assert_eq!(editor.font_size(), 1.0);
        editor.on_wheel(
            WheelEvent::new(0.0, 3.0).with_modifiers(Modifiers::SUPER),
            now,
        );
        assert_eq!(editor.font_size(), 1.0);
    }

    #[test]
    fn unmodified_wheel_over_hovered_marker_reports_to_host() {
        let now = Instant::now();
        let mut editor = mounted(now);
        editor.set_value("abc", now);
        editor.set_markers(vec![Marker::new("m", 0, 3, "abc", "x")]);
        editor.render(now);
        editor.on_pointer(PointerEvent::moved(1.0, 1.0));
        editor.take_events();

        editor.on_wheel(WheelEvent::new(0.0, 2.0), now);
        assert_eq!(
            editor.take_events(),
            vec![EditorEvent::MarkerWheel {
                key: "m".into(),
                delta_y: 2.0
            }]
        );
        // Font size untouched.
        assert_eq!(editor.font_size(), 16.0);
    }

    #[test]
    fn marker_replacement_emits_created_events() {
        let now = Instant::now();
        let mut editor = mounted(now);
        editor.set_value("abc", now);
        editor.set_markers(vec![Marker::new("a", 0, 1, "abc", "x")]);
        editor.set_markers(vec![
            Marker::new("a", 0, 1, "abc", "x"),
            Marker::new("b", 1, 1, "abc", "x"),
        ]);
        let created: Vec<_> = editor
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, EditorEvent::MarkerCreated { .. }))
            .collect();
        assert_eq!(
            created,
            vec![
                EditorEvent::MarkerCreated { key: "a".into() },
                EditorEvent::MarkerCreated { key: "b".into() },
            ]
        );
    }

    #[test]
    fn autofocus_requests_focus_then_places_caret() {
        let t0 = Instant::now();
        let mut editor = CodeEdit::new().with_auto_focus(true);
        editor.on_selection(Some(SelectionRange::caret(5)), t0);
        editor.mount(SurfaceGeometry::default(), t0);

        // Nothing fires before the deferral.
        editor.tick(t0);
        assert!(
            !editor
                .take_events()
                .contains(&EditorEvent::FocusRequested)
        );

        let t1 = t0 + FOCUS_DEFER;
        editor.tick(t1);
        assert!(editor.take_events().contains(&EditorEvent::FocusRequested));
        // Caret still at its old spot until the second deferral.
        assert_eq!(editor.caret_index(), 5);

        let t2 = t1 + FOCUS_DEFER;
        editor.tick(t2);
        assert_eq!(editor.caret_index(), 0);
    }

    #[test]
    fn debounced_ticks_rehighlight_once_with_latest_value() {
        let t0 = Instant::now();
        let mut editor = mounted(t0);

        for i in 0..10 {
            let now = t0 + Duration::from_millis(i * 5);
            editor.on_input(format!("edit {i}"), now);
            editor.tick(now);
        }

        let done = t0 + Duration::from_millis(45) + DEFAULT_DEBOUNCE;
        assert!(editor.tick(done));

        let tree = editor.render(done);
        let crate::compose::Layer::Syntax(syntax) = &tree.layers[0] else {
            panic!("expected syntax layer first");
        };
        assert_eq!(syntax.text, "edit 9");
    }

    #[test]
    fn syntax_layer_lags_live_value_until_debounce_fires() {
        let t0 = Instant::now();
        let mut editor = mounted(t0).with_value("old");
        editor.set_value("new", t0);

        let tree = editor.render(t0);
        let crate::compose::Layer::Syntax(syntax) = &tree.layers[0] else {
            panic!("expected syntax layer first");
        };
        assert_eq!(syntax.text, "old");
    }

    #[test]
    fn deferred_syntax_resolution_schedules_one_recompute() {
        let t0 = Instant::now();
        let mut editor = mounted(t0);
        editor.set_syntax(SyntaxSource::Deferred, t0);
        editor.tick(t0 + Duration::from_secs(1));

        // Definition arrives much later; the recompute uses the text
        // current at execution time.
        let t1 = t0 + Duration::from_secs(2);
        editor.set_value("later text", t1);
        editor.resolve_syntax(SyntaxDefinition::default(), t1);
        assert!(editor.tick(t1 + DEFAULT_DEBOUNCE));

        let tree = editor.render(t1 + DEFAULT_DEBOUNCE);
        let crate::compose::Layer::Syntax(syntax) = &tree.layers[0] else {
            panic!("expected syntax layer first");
        };
        assert_eq!(syntax.text, "later text");
    }

    #[test]
    fn comments_attribute_round_trip() {
        let mut editor = CodeEdit::new();
        editor.set_comments("# <!-- -->");
        assert_eq!(editor.comments().line.as_deref(), Some("#"));
        assert_eq!(editor.comments().to_string(), "# <!-- -->");
    }
}
