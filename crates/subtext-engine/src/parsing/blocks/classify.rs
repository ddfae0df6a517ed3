use crate::parsing::{
    inline::{Span, tokenize},
    whitespace,
};

use super::{
    kinds::{Blank, Sigil},
    types::{Block, BlockKind},
};

/// Classifies complete lines into [`Block`]s.
///
/// Each line is classified on its own, with no reference to surrounding
/// lines. Classification is total: every line, including the empty string,
/// yields exactly one block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtextLineClassifier;

impl SubtextLineClassifier {
    /// Classifies a single line (without its newline) into a [`Block`].
    ///
    /// Sigil detection wins over blank detection, so `"-"` or `"#  "` are
    /// sigil blocks. Remaining whitespace-only lines are blanks; anything else
    /// is a paragraph.
    pub fn classify(&self, line: &str) -> Block {
        if let Some((kind, len)) = Sigil::detect(line) {
            let mut spans = vec![Span::sigil(&line[..len])];
            spans.extend(content_spans(&line[len..]));
            return Block::with_spans(kind, spans);
        }

        if Blank::is_blank(line) {
            return Block::blank(line);
        }

        Block::with_spans(BlockKind::Paragraph, content_spans(line))
    }
}

/// Splits leading whitespace off `rest` as an empty-space span, then
/// tokenizes what follows.
///
/// The empty-space span is everything in front of where the tokenized content
/// starts, so the spans always concatenate back to `rest`. Empty content
/// contributes no spans.
fn content_spans(rest: &str) -> Vec<Span> {
    let content = whitespace::trim_start(rest);
    let leading = &rest[..rest.len() - content.len()];

    let mut spans = vec![];
    if !leading.is_empty() {
        spans.push(Span::empty_space(leading));
    }
    if !content.is_empty() {
        spans.extend(tokenize(content));
    }
    spans
}
