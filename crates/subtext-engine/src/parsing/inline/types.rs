use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Slashlink;

/// The kind of an inline span.
///
/// Serialized in kebab-case (`"text-span"`, `"empty-space"`, ...) to match the
/// wire shape consumed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanKind {
    /// The single leading `#`, `-` or `>` of a sigil block.
    Sigil,
    /// Leading whitespace, or the whole text of a blank line.
    EmptySpace,
    /// Plain text, including any interior whitespace.
    TextSpan,
    /// A bare `http://` or `https://` link.
    Hyperlink,
    /// A `/`-prefixed reference.
    Slashlink,
}

/// A parsed inline span: its kind plus the exact source text it covers.
///
/// Spans own their text so blocks can outlive the buffer they were split
/// from. Concatenating a block's span texts reproduces the source line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "type")]
    pub kind: SpanKind,
    #[serde(rename = "content")]
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn sigil(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Sigil, text)
    }

    pub fn empty_space(text: impl Into<String>) -> Self {
        Self::new(SpanKind::EmptySpace, text)
    }

    pub fn text_span(text: impl Into<String>) -> Self {
        Self::new(SpanKind::TextSpan, text)
    }

    pub fn hyperlink(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Hyperlink, text)
    }

    pub fn slashlink(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Slashlink, text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true for link-like spans (hyperlinks and slashlinks).
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self.kind, SpanKind::Hyperlink | SpanKind::Slashlink)
    }

    /// Parses a slashlink span into its peer and slug.
    ///
    /// Returns `None` for other kinds and for a bare `/`.
    #[must_use]
    pub fn as_slashlink(&self) -> Option<Slashlink> {
        if self.kind != SpanKind::Slashlink {
            return None;
        }
        self.text.parse().ok()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
