#![forbid(unsafe_code)]

//! Interface to the external syntax highlighter.
//!
//! Tokenization itself is a collaborator, not part of this engine. The
//! engine only needs three things: a span model for the syntax layer, a
//! [`Highlighter`] trait to call when the debounce window fires, and a slot
//! that remembers whether a syntax definition is present, still pending, or
//! absent. Definitions may resolve long after the widget mounts (the host
//! loads language packs lazily); resolution just schedules a re-render.

/// A styled span in the syntax layer. Byte range into the highlighted text,
/// `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Style class assigned by the highlighter, consumed by the theme.
    pub class: String,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub fn new(start: usize, end: usize, class: impl Into<String>) -> Self {
        Self {
            start,
            end,
            class: class.into(),
        }
    }
}

/// A single pattern rule inside a syntax definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxRule {
    /// Style class emitted for matches.
    pub class: String,
    /// Pattern source, interpreted by the external tokenizer.
    pub pattern: String,
}

/// A syntax definition for one language.
///
/// The engine treats the rules as opaque; only the external highlighter
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxDefinition {
    /// Language name this definition covers.
    pub language: String,
    /// Tokenization rules, in priority order.
    pub rules: Vec<SyntaxRule>,
}

/// How the host supplies a syntax definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxSource {
    /// A definition available right now.
    Inline(SyntaxDefinition),
    /// A definition that resolves later; the host calls
    /// [`CodeEdit::resolve_syntax`](crate::editor::CodeEdit::resolve_syntax)
    /// when it arrives.
    Deferred,
}

/// External tokenizer interface.
///
/// Implementations must be pure with respect to their inputs: the same
/// text and definition yield the same spans.
pub trait Highlighter {
    /// Tokenize `text` under `definition` (or no definition) into spans.
    fn tokenize(&self, text: &str, definition: Option<&SyntaxDefinition>) -> Vec<Span>;
}

/// Fallback highlighter: one plain-text span over everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn tokenize(&self, text: &str, _definition: Option<&SyntaxDefinition>) -> Vec<Span> {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Span::new(0, text.len(), "text")]
        }
    }
}

/// Tracks the lifecycle of the widget's syntax definition.
#[derive(Debug, Clone, Default)]
pub(crate) struct SyntaxSlot {
    definition: Option<SyntaxDefinition>,
    awaiting: bool,
}

impl SyntaxSlot {
    /// Accept a definition source from the host.
    pub(crate) fn set_source(&mut self, source: SyntaxSource) {
        match source {
            SyntaxSource::Inline(definition) => {
                self.definition = Some(definition);
                self.awaiting = false;
            }
            SyntaxSource::Deferred => {
                self.awaiting = true;
            }
        }
    }

    /// Resolve a previously deferred definition.
    ///
    /// Returns `true` if the slot was actually awaiting one; a resolution
    /// nobody asked for is accepted but reported as `false` so the caller
    /// can skip the re-render.
    pub(crate) fn resolve(&mut self, definition: SyntaxDefinition) -> bool {
        let was_awaiting = self.awaiting;
        self.definition = Some(definition);
        self.awaiting = false;
        was_awaiting
    }

    /// The definition currently in effect, if any.
    pub(crate) fn definition(&self) -> Option<&SyntaxDefinition> {
        self.definition.as_ref()
    }
}
