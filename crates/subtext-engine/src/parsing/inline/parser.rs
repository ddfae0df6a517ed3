use crate::parsing::whitespace::is_subtext_whitespace;

use super::{
    cursor::CharCursor,
    kinds::{Hyperlink, SlashlinkPrefix},
    types::{Span, SpanKind},
};

/// Tokenizes a line's content into a sequence of inline [`Span`]s.
///
/// `s` is the content after the caller has split off any sigil and leading
/// whitespace. The result covers all of `s` with no gaps and always holds at
/// least one span (a lone empty `TextSpan` for empty input).
///
/// # Boundaries
/// Links are only recognized at a word boundary: the previous char is
/// whitespace or there is none. At a boundary, `h` + `ttp:/`/`ttps:/` opens a
/// `Hyperlink`, `/` opens a `Slashlink`, anything else continues as text.
/// Whitespace ends any open link and starts a new `TextSpan` with it.
pub fn tokenize(s: &str) -> Vec<Span> {
    let mut cur = CharCursor::new(s);
    let mut out = vec![];
    let mut open: Option<SpanKind> = None;
    let mut buf = String::new();

    // Helper to flush the open span, if any, before a new one starts
    fn flush(out: &mut Vec<Span>, kind: Option<SpanKind>, buf: &mut String) {
        if let Some(kind) = kind {
            out.push(Span::new(kind, std::mem::take(buf)));
        }
    }

    while let Some(c) = cur.advance() {
        if cur.previous().is_none_or(is_subtext_whitespace) {
            if Hyperlink::opens_at(c, &cur) {
                flush(&mut out, open.take(), &mut buf);
                open = Some(SpanKind::Hyperlink);
            } else if SlashlinkPrefix::opens_at(c) {
                flush(&mut out, open.take(), &mut buf);
                open = Some(SpanKind::Slashlink);
            } else {
                open = Some(SpanKind::TextSpan);
            }
        }

        if is_subtext_whitespace(c) && open != Some(SpanKind::TextSpan) {
            flush(&mut out, open.take(), &mut buf);
            open = Some(SpanKind::TextSpan);
        }

        buf.push(c);
    }

    out.push(Span::new(open.unwrap_or(SpanKind::TextSpan), buf));
    out
}
