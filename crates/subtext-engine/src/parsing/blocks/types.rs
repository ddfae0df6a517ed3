use serde::{Deserialize, Serialize};

use crate::parsing::inline::{Span, SpanKind};

/// The kind of a block, decided by the line's leading char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A `#`-prefixed line.
    Header,
    /// A `>`-prefixed line.
    Quote,
    /// A `-`-prefixed line.
    List,
    /// Any other line with non-whitespace content.
    Paragraph,
    /// An empty or whitespace-only line.
    Blank,
}

impl BlockKind {
    /// Returns true for kinds introduced by a sigil char.
    #[must_use]
    pub fn has_sigil(self) -> bool {
        matches!(self, BlockKind::Header | BlockKind::Quote | BlockKind::List)
    }
}

/// Inline content of a block.
///
/// Blank lines carry a single `EmptySpace` span; every other kind carries an
/// ordered span sequence. Serialized untagged, so a blank's content is a bare
/// span object and everything else is an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Blank(Span),
    Spans(Vec<Span>),
}

/// A parsed block: exactly one per source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The kind of block (Header, Paragraph, Blank, etc.)
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// The spans covering the whole source line.
    pub content: BlockContent,
}

impl Block {
    /// Builds a blank block holding `text` verbatim.
    pub fn blank(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Blank,
            content: BlockContent::Blank(Span::empty_space(text)),
        }
    }

    /// Builds a non-blank block from its spans.
    pub fn with_spans(kind: BlockKind, spans: Vec<Span>) -> Self {
        debug_assert!(kind != BlockKind::Blank, "blank blocks hold a single span");
        Self {
            kind,
            content: BlockContent::Spans(spans),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self.content, BlockContent::Blank(_))
    }

    /// All spans of the block in source order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        match &self.content {
            BlockContent::Blank(span) => std::slice::from_ref(span),
            BlockContent::Spans(spans) => spans,
        }
    }

    /// The spans after the sigil and leading whitespace.
    ///
    /// For paragraphs this skips leading whitespace; for headers, lists and
    /// quotes it skips the sigil and the whitespace after it; blanks have no
    /// content spans.
    #[must_use]
    pub fn content_spans(&self) -> &[Span] {
        let spans = match &self.content {
            BlockContent::Blank(_) => return &[],
            BlockContent::Spans(spans) => spans.as_slice(),
        };
        let skip = spans
            .iter()
            .take_while(|s| match s.kind {
                SpanKind::Sigil => self.kind.has_sigil(),
                SpanKind::EmptySpace => true,
                _ => false,
            })
            .count();
        &spans[skip..]
    }

    /// The concatenated text of [`Block::content_spans`].
    #[must_use]
    pub fn to_text_content(&self) -> String {
        self.content_spans().iter().map(Span::as_str).collect()
    }
}
