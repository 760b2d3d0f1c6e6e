#![forbid(unsafe_code)]

//! Host-facing attribute types.
//!
//! Attribute values arrive from the host as strings (they mirror element
//! attributes) and are parsed into structured form here. Parsing is
//! lenient where the original attribute grammar was lenient: a partial
//! `comments` tuple degrades to whatever fields were present.

use std::fmt;
use std::str::FromStr;

/// Error produced when an attribute string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// The `tab-style` attribute was neither `spaces` nor `tabs`.
    InvalidTabStyle(String),
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTabStyle(value) => {
                write!(f, "invalid tab style {value:?}, expected \"spaces\" or \"tabs\"")
            }
        }
    }
}

impl std::error::Error for AttributeError {}

/// How the Tab key is materialized in the text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabStyle {
    /// Insert spaces up to the next tab stop.
    #[default]
    Spaces,
    /// Insert a literal tab character.
    Tabs,
}

impl FromStr for TabStyle {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spaces" => Ok(Self::Spaces),
            "tabs" => Ok(Self::Tabs),
            other => Err(AttributeError::InvalidTabStyle(other.to_string())),
        }
    }
}

impl fmt::Display for TabStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spaces => "spaces",
            Self::Tabs => "tabs",
        })
    }
}

/// Comment markers for the configured language.
///
/// Tuple-encoded in the attribute as a single whitespace-separated string:
/// single-line marker first, then the multi-line open and close pair.
/// `"// /* */"` is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Single-line comment marker.
    pub line: Option<String>,
    /// Multi-line open/close marker pair.
    pub block: Option<(String, String)>,
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::parse("// /* */")
    }
}

impl CommentSyntax {
    /// Parse the tuple-encoded attribute value.
    ///
    /// Missing fields are simply absent: `""` parses to no markers at all,
    /// `"#"` to a line marker only. A block pair needs both markers.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split_whitespace();
        let line = parts.next().map(str::to_string);
        let block = match (parts.next(), parts.next()) {
            (Some(open), Some(close)) => Some((open.to_string(), close.to_string())),
            _ => None,
        };
        Self { line, block }
    }
}

impl fmt::Display for CommentSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(line) = &self.line {
            f.write_str(line)?;
            first = false;
        }
        if let Some((open, close)) = &self.block {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{open} {close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_style_round_trips() {
        assert_eq!("spaces".parse::<TabStyle>().unwrap(), TabStyle::Spaces);
        assert_eq!("tabs".parse::<TabStyle>().unwrap(), TabStyle::Tabs);
        assert_eq!(TabStyle::Tabs.to_string(), "tabs");
    }

    #[test]
    fn tab_style_rejects_unknown() {
        let err = "elastic".parse::<TabStyle>().unwrap_err();
        assert_eq!(err, AttributeError::InvalidTabStyle("elastic".into()));
        assert!(err.to_string().contains("elastic"));
    }

    #[test]
    fn comments_default_is_c_style() {
        let c = CommentSyntax::default();
        assert_eq!(c.line.as_deref(), Some("//"));
        assert_eq!(
            c.block,
            Some(("/*".to_string(), "*/".to_string()))
        );
    }

    #[test]
    fn comments_parse_is_lenient() {
        let hash = CommentSyntax::parse("#");
        assert_eq!(hash.line.as_deref(), Some("#"));
        assert_eq!(hash.block, None);

        let empty = CommentSyntax::parse("   ");
        assert_eq!(empty.line, None);
        assert_eq!(empty.block, None);

        // An open marker without a close marker is not a block pair.
        let partial = CommentSyntax::parse("-- {-");
        assert_eq!(partial.line.as_deref(), Some("--"));
        assert_eq!(partial.block, None);
    }

    #[test]
    fn comments_display_re_encodes() {
        assert_eq!(CommentSyntax::default().to_string(), "// /* */");
        assert_eq!(CommentSyntax::parse("#").to_string(), "#");
    }
}
