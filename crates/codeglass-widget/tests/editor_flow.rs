//! End-to-end flows through the `CodeEdit` widget: decoration anchoring,
//! lens placement, debounced recomputation, hover transitions, and the
//! scroll/zoom reconciliation paths.

use std::cell::Cell;
use std::rc::Rc;

use codeglass_core::event::{Modifiers, PointerEvent, SelectionRange, WheelEvent};
use codeglass_core::geometry::{Point, Rect};
use codeglass_core::{Duration, Instant};
use codeglass_widget::{
    CodeEdit, DEFAULT_DEBOUNCE, EditorEvent, Highlighter, Layer, LayerTree, Lens, Marker,
    PlainHighlighter, Span, SurfaceGeometry, SyntaxDefinition,
};

/// Highlighter that counts how often it runs via a shared cell.
#[derive(Default, Clone)]
struct CountingHighlighter {
    runs: Rc<Cell<u32>>,
}

impl Highlighter for CountingHighlighter {
    fn tokenize(&self, text: &str, definition: Option<&SyntaxDefinition>) -> Vec<Span> {
        self.runs.set(self.runs.get() + 1);
        PlainHighlighter.tokenize(text, definition)
    }
}

fn mounted(now: Instant) -> CodeEdit {
    let mut editor = CodeEdit::new();
    editor.mount(SurfaceGeometry::new(Point::new(0.0, 0.0), 400.0, 300.0), now);
    editor
}

fn syntax_text(tree: &LayerTree) -> &str {
    let Layer::Syntax(syntax) = &tree.layers[0] else {
        panic!("syntax layer must be bottom-most");
    };
    &syntax.text
}

#[test]
fn marker_rect_covers_bc_on_line_one() {
    let now = Instant::now();
    let mut editor = mounted(now);
    editor.set_value("abc\ndef", now);
    editor.set_markers(vec![Marker::new("m", 1, 2, "abc\ndef", "warn")]);

    editor.render(now);
    let rect = editor.registry().marker("m").unwrap().rect().unwrap();

    // Default metrics: 16px font, 8px advance, 24px line height.
    // "bc" starts one cell in on line 1 and spans two cells.
    assert_eq!(rect, Rect::new(8.0, 0.0, 16.0, 24.0));
    // Line 1 only: the rect never reaches line 2's band.
    assert!(rect.bottom() <= 24.0 + f32::EPSILON);
}

#[test]
fn lens_renders_after_line_two_not_line_one() {
    let now = Instant::now();
    let mut editor = mounted(now);
    editor.set_value("abc\ndef", now);
    editor.set_lenses(vec![Lens::new(2, "note")]);

    let tree = editor.render(now);
    let lens_layer = tree
        .layers
        .iter()
        .find_map(|layer| match layer {
            Layer::Lenses(l) => Some(l),
            _ => None,
        })
        .unwrap();

    let item = &lens_layer.items[0];
    assert_eq!(item.message, "note");
    // Line 2's vertical band, past "def" horizontally.
    assert_eq!(item.y, 24.0);
    assert!(item.x > 3.0 * 8.0);
}

#[test]
fn ten_rapid_edits_highlight_exactly_once_with_final_text() {
    let t0 = Instant::now();
    let counter = CountingHighlighter::default();
    let runs = Rc::clone(&counter.runs);
    let mut editor = CodeEdit::new().with_highlighter(Box::new(counter));
    editor.mount(SurfaceGeometry::default(), t0);

    // The builder highlighted the (empty) initial value once.
    let baseline = runs.get();

    // Ten input events inside 50ms against a 16ms window.
    for i in 0..10u64 {
        let now = t0 + Duration::from_millis(i * 5);
        editor.on_input(format!("value {i}"), now);
        editor.tick(now);
    }
    assert_eq!(runs.get(), baseline, "no recompute mid-burst");

    let done = t0 + Duration::from_millis(45) + DEFAULT_DEBOUNCE;
    assert!(editor.tick(done));
    let tree = editor.render(done);
    assert_eq!(syntax_text(&tree), "value 9");
    assert_eq!(runs.get(), baseline + 1, "exactly one recompute per burst");

    // Idle ticks fire nothing further.
    editor.tick(done + Duration::from_secs(1));
    assert_eq!(runs.get(), baseline + 1);
}

#[test]
fn hover_enter_and_leave_pair_across_adjacent_markers() {
    let now = Instant::now();
    let mut editor = mounted(now);
    editor.set_value("abcdef", now);
    editor.set_markers(vec![
        Marker::new("left", 0, 2, "abcdef", "x"),
        Marker::new("right", 2, 2, "abcdef", "y"),
    ]);
    editor.render(now);
    editor.take_events();

    // Default advance is 8px: "left" spans x 0..16, "right" 16..32.
    editor.on_pointer(PointerEvent::moved(5.0, 5.0));
    editor.on_pointer(PointerEvent::moved(25.0, 5.0));
    editor.on_pointer(PointerEvent::moved(300.0, 5.0));

    assert_eq!(
        editor.take_events(),
        vec![
            EditorEvent::MarkerEntered { key: "left".into() },
            EditorEvent::MarkerLeft { key: "left".into() },
            EditorEvent::MarkerEntered { key: "right".into() },
            EditorEvent::MarkerLeft { key: "right".into() },
        ]
    );
}

#[test]
fn scroll_pinning_round_trips_through_the_widget() {
    let now = Instant::now();
    let mut editor = mounted(now);

    editor.set_scroll_top(33.0);
    assert_eq!(editor.scroll_top(), 33.0);

    editor.on_surface_scroll(12.0, 90.0);
    assert_eq!(editor.scroll_left(), 12.0);
    assert_eq!(editor.scroll_top(), 90.0);

    let scrolls: Vec<_> = editor
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, EditorEvent::Scroll { .. }))
        .collect();
    assert_eq!(scrolls.len(), 2);
}

#[test]
fn auto_resize_tracks_content_after_debounce_settles() {
    let t0 = Instant::now();
    let mut editor = CodeEdit::new().with_auto_resize(true);
    editor.mount(SurfaceGeometry::default(), t0);
    editor.tick(t0);
    let one_line = editor.content_height();
    assert!(one_line > 0.0);

    editor.set_value("a\nb\nc", t0);
    // Mid-burst: measure still deferred behind the debounce window.
    editor.tick(t0);
    assert_eq!(editor.content_height(), one_line);

    editor.tick(t0 + DEFAULT_DEBOUNCE);
    assert_eq!(editor.content_height(), one_line * 3.0);
}

#[test]
fn zoom_shrinks_layout_and_reflows_markers() {
    let now = Instant::now();
    let mut editor = mounted(now);
    editor.set_value("abc", now);
    editor.set_markers(vec![Marker::new("m", 1, 1, "abc", "x")]);
    editor.render(now);
    let before = editor.registry().marker("m").unwrap().rect().unwrap();

    editor.on_wheel(
        WheelEvent::new(0.0, 1.0).with_modifiers(Modifiers::CTRL),
        now,
    );
    assert_eq!(editor.font_size(), 15.5);

    // Rect was invalidated and recomputes under the new metrics.
    editor.render(now);
    let after = editor.registry().marker("m").unwrap().rect().unwrap();
    assert!(after.x < before.x);
    assert!(after.height < before.height);
}

#[test]
fn caret_blinks_only_after_quiescence() {
    let t0 = Instant::now();
    let mut editor = mounted(t0);
    editor.set_value("hello", t0);
    editor.on_selection(Some(SelectionRange::caret(2)), t0);

    let phase_at = |editor: &mut CodeEdit, at| {
        let tree = editor.render(at);
        let Some(Layer::Caret(caret)) = tree.layers.last() else {
            panic!("caret layer must be top-most");
        };
        caret.phase
    };

    use codeglass_widget::BlinkPhase;
    assert_eq!(phase_at(&mut editor, t0), BlinkPhase::None);
    assert_eq!(
        phase_at(&mut editor, t0 + Duration::from_millis(499)),
        BlinkPhase::None
    );
    assert_eq!(
        phase_at(&mut editor, t0 + Duration::from_millis(500)),
        BlinkPhase::Blink
    );

    // A new range update re-arms the quiescence delay.
    let t1 = t0 + Duration::from_millis(600);
    editor.on_selection(Some(SelectionRange::caret(3)), t1);
    assert_eq!(phase_at(&mut editor, t1), BlinkPhase::None);
    assert_eq!(
        phase_at(&mut editor, t1 + Duration::from_millis(500)),
        BlinkPhase::Blink
    );
}

#[test]
fn native_caret_is_always_suppressed() {
    let now = Instant::now();
    let mut editor = mounted(now);
    let tree = editor.render(now);
    assert!(tree.suppress_native_caret);
}
