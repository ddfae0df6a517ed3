use crate::parsing::{
    blocks::{Block, BlockContent, BlockKind},
    inline::SpanKind,
    serialize::serialize,
    whitespace::is_subtext_whitespace,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Serializing the blocks reproduces `source` (minus one trailing newline)
/// - Blank blocks, and only blank blocks, hold a single whitespace-only span
/// - Sigil blocks open with a one-char sigil span; other blocks have none
/// - Empty-space spans only appear as leading whitespace
/// - Non-blank blocks contain no empty spans and no adjacent text spans
/// - Links never contain whitespace
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, blocks: &[Block]) {
    let expected = source.strip_suffix('\n').unwrap_or(source);
    assert_eq!(serialize(blocks), expected, "round trip mismatch");

    for (i, b) in blocks.iter().enumerate() {
        let line = b.to_text();
        assert!(!line.contains('\n'), "block {i} spans a newline: {line:?}");

        let spans = match &b.content {
            BlockContent::Blank(span) => {
                assert_eq!(b.kind, BlockKind::Blank, "block {i}: blank content on {:?}", b.kind);
                assert_eq!(span.kind, SpanKind::EmptySpace, "block {i}: blank holds {:?}", span.kind);
                assert!(
                    span.text.chars().all(is_subtext_whitespace),
                    "block {i}: blank holds non-whitespace {:?}",
                    span.text
                );
                continue;
            }
            BlockContent::Spans(spans) => spans,
        };

        assert_ne!(b.kind, BlockKind::Blank, "block {i}: blank kind with span list");
        assert!(!spans.is_empty(), "block {i}: no spans");

        let lead = if b.kind.has_sigil() {
            assert_eq!(spans[0].kind, SpanKind::Sigil, "block {i}: missing sigil");
            assert_eq!(spans[0].text.chars().count(), 1, "block {i}: sigil too long");
            1
        } else {
            0
        };

        for (j, s) in spans.iter().enumerate() {
            assert!(!s.text.is_empty(), "block {i} span {j}: empty {:?}", s.kind);
            match s.kind {
                SpanKind::Sigil => assert_eq!(j, 0, "block {i} span {j}: stray sigil"),
                SpanKind::EmptySpace => {
                    assert_eq!(j, lead, "block {i} span {j}: empty space not leading");
                    assert!(
                        s.text.chars().all(is_subtext_whitespace),
                        "block {i} span {j}: empty space holds {:?}",
                        s.text
                    );
                }
                SpanKind::Hyperlink | SpanKind::Slashlink => assert!(
                    !s.text.chars().any(is_subtext_whitespace),
                    "block {i} span {j}: link contains whitespace {:?}",
                    s.text
                ),
                SpanKind::TextSpan => {}
            }
        }

        for pair in spans.windows(2) {
            assert!(
                !(pair[0].kind == SpanKind::TextSpan && pair[1].kind == SpanKind::TextSpan),
                "block {i}: adjacent text spans {:?} and {:?}",
                pair[0].text,
                pair[1].text
            );
        }
    }
}
