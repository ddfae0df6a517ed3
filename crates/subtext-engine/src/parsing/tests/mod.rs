//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with Debug output for readability.
//! Fixtures (.subtext) and snapshots (.snap) are co-located in `fixtures/`.

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::{Span, SpanKind},
    parse_document,
    serialize::serialize,
    snapshot,
    stream::LineSplitter,
    whitespace,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

// Fixture-based snapshot tests

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

#[test]
fn fixture_links() {
    assert_fixture("links");
}

#[test]
fn fixture_edge_whitespace() {
    assert_fixture("edge_whitespace");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/{name}.subtext")).unwrap();

    let doc = parse_document(&source);
    snapshot::invariants(&source, &doc.blocks);

    let snap = snapshot::normalize(&doc.blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, snap);
    });
}

// Literal scenarios

fn paragraph(spans: Vec<Span>) -> Block {
    Block::with_spans(BlockKind::Paragraph, spans)
}

#[test]
fn two_lines_without_trailing_blank() {
    let doc = parse_document("Hello,\nWorld!");
    assert_eq!(
        doc.blocks,
        vec![
            paragraph(vec![Span::text_span("Hello,")]),
            paragraph(vec![Span::text_span("World!")]),
        ]
    );
}

#[test]
fn interior_whitespace_line_is_blank() {
    let doc = parse_document("Hello,\n  \nWorld!");
    assert_eq!(
        doc.blocks,
        vec![
            paragraph(vec![Span::text_span("Hello,")]),
            Block::blank("  "),
            paragraph(vec![Span::text_span("World!")]),
        ]
    );
}

#[test]
fn header_with_sigil_and_space() {
    let doc = parse_document("# Hello, world!");
    assert_eq!(
        doc.blocks,
        vec![Block::with_spans(
            BlockKind::Header,
            vec![
                Span::sigil("#"),
                Span::empty_space(" "),
                Span::text_span("Hello, world!"),
            ]
        )]
    );
}

#[test]
fn list_items_with_slashlink() {
    let doc = parse_document("- One\n- /two\n- Three");
    assert_eq!(doc.blocks.len(), 3);
    assert!(doc.blocks.iter().all(|b| b.kind == BlockKind::List));
    assert_eq!(
        doc.blocks[1].spans(),
        &[
            Span::sigil("-"),
            Span::empty_space(" "),
            Span::slashlink("/two"),
        ]
    );
}

#[test]
fn hyperlink_keeps_query_and_fragment() {
    let doc = parse_document("See http://example.com/foo?bar=baz#zot for example");
    assert_eq!(
        doc.blocks,
        vec![paragraph(vec![
            Span::text_span("See "),
            Span::hyperlink("http://example.com/foo?bar=baz#zot"),
            Span::text_span(" for example"),
        ])]
    );
}

#[test]
fn whitespace_only_input_is_one_blank() {
    assert_eq!(parse_document("   ").blocks, vec![Block::blank("   ")]);
}

#[test]
fn empty_input_has_no_blocks() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn terminating_newline_is_dissolved() {
    let doc = parse_document("Hello,\n");
    assert_eq!(doc.blocks, vec![paragraph(vec![Span::text_span("Hello,")])]);
    assert_eq!(doc.to_source(), "Hello,");
}

// Property tests

const CORPUS: &[&str] = &[
    "",
    "\n",
    "\n\n",
    "   ",
    "Hello,\nWorld!",
    "Hello,\n  \nWorld!",
    "# Hello, world!",
    "- One\n- /two\n- Three",
    "See http://example.com/foo?bar=baz#zot for example",
    "#\n-\n>\n#  \n",
    "  leading\n\tindent /a https://b c\n",
    "word/not-link xhttp://nope /yes\n> ¿qué? /ñ\n",
    "日本語 /パス http://例え.jp\n\u{3000}\n",
    "a\r\nb\r\n",
    "/\nh\nhttp:/\nhttps:\n",
    "trailing spaces   \n   \n\n",
];

/// Leading whitespace of every non-blank line after its sigil, if any.
fn expected_leading(line: &str) -> &str {
    let rest = match line.chars().next() {
        Some('#' | '-' | '>') => &line[1..],
        _ => line,
    };
    &rest[..rest.len() - whitespace::trim_start(rest).len()]
}

#[rstest]
fn round_trip_holds(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15)] case: usize) {
    let source = CORPUS[case];
    let doc = parse_document(source);

    snapshot::invariants(source, &doc.blocks);
    assert_eq!(serialize(&doc.blocks), source.strip_suffix('\n').unwrap_or(source));
}

#[test]
fn round_trip_is_exact_without_trailing_newline() {
    for source in CORPUS.iter().filter(|s| !s.ends_with('\n')) {
        assert_eq!(parse_document(source).to_source(), *source);
    }
}

#[test]
fn every_two_way_split_matches_bulk() {
    for source in CORPUS {
        let bulk = parse_document(source).blocks;
        for (i, _) in source.char_indices().skip(1) {
            let mut splitter = LineSplitter::new();
            let mut blocks = splitter.feed(&source[..i]);
            blocks.extend(splitter.feed(&source[i..]));
            blocks.extend(splitter.finish());
            assert_eq!(blocks, bulk, "split at byte {i} of {source:?}");
        }
    }
}

#[test]
fn one_char_per_chunk_matches_bulk() {
    for source in CORPUS {
        let mut splitter = LineSplitter::new();
        let mut blocks = vec![];
        let mut buf = [0u8; 4];
        for c in source.chars() {
            blocks.extend(splitter.feed(c.encode_utf8(&mut buf)));
        }
        blocks.extend(splitter.finish());
        assert_eq!(blocks, parse_document(source).blocks, "source {source:?}");
    }
}

#[test]
fn single_chunk_matches_bulk() {
    for source in CORPUS {
        let mut splitter = LineSplitter::new();
        let mut blocks = splitter.feed(source);
        blocks.extend(splitter.finish());
        assert_eq!(blocks, parse_document(source).blocks);
    }
}

#[test]
fn leading_whitespace_is_separate_span() {
    for source in CORPUS {
        for block in parse_document(source).blocks.iter().filter(|b| !b.is_blank()) {
            let line = block.to_text();
            let leading = expected_leading(&line);
            let lead = usize::from(block.kind.has_sigil());
            let after_sigil = block.spans().get(lead);
            if leading.is_empty() {
                assert!(after_sigil.is_none_or(|s| s.kind != SpanKind::EmptySpace));
            } else {
                assert_eq!(after_sigil, Some(&Span::empty_space(leading)), "line {line:?}");
            }
        }
    }
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t \t")]
#[case("\u{3000}")]
#[case("\r")]
#[case("\u{FEFF}")]
fn whitespace_lines_are_blank(#[case] line: &str) {
    let doc = parse_document(line);
    let expected: Vec<Block> = if line.is_empty() {
        vec![]
    } else {
        vec![Block::blank(line)]
    };
    assert_eq!(doc.blocks, expected);

    let doc = parse_document(&format!("{line}\nx"));
    assert_eq!(doc.blocks[0], Block::blank(line));
}

#[rstest]
#[case("a/b", false)]
#[case("a /b", true)]
#[case("xhttp://a", false)]
#[case("x http://a", true)]
#[case("(https://a", false)]
#[case("\thttps://a", true)]
fn links_only_open_at_boundaries(#[case] line: &str, #[case] link: bool) {
    let doc = parse_document(line);
    let has_link = doc.blocks[0].spans().iter().any(Span::is_link);
    assert_eq!(has_link, link, "line {line:?}");
}

#[rstest]
#[case("\u{FEFF}# T", vec![Span::empty_space("\u{FEFF}"), Span::text_span("# T")])]
#[case("\u{FEFF}/x", vec![Span::empty_space("\u{FEFF}"), Span::slashlink("/x")])]
#[case("a\u{FEFF}/x", vec![Span::text_span("a\u{FEFF}"), Span::slashlink("/x")])]
#[case("\u{85}", vec![Span::text_span("\u{85}")])]
#[case("a\u{85}/x", vec![Span::text_span("a\u{85}/x")])]
fn bom_is_whitespace_and_nel_is_not(#[case] line: &str, #[case] spans: Vec<Span>) {
    assert_eq!(parse_document(line).blocks, vec![paragraph(spans)]);
}

#[test]
fn byte_order_mark_line_between_paragraphs_is_blank() {
    let doc = parse_document("a\n\u{FEFF}\nb");
    assert_eq!(doc.blocks[1], Block::blank("\u{FEFF}"));
}

/// Every string of up to `max_len` chars over `alphabet`.
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn generated_inputs_round_trip_and_ignore_chunking() {
    let inputs = all_strings(&['#', '-', ' ', '/', 'h', '\n', 'a'], 5);
    assert_eq!(inputs.len(), 19_608);

    for source in &inputs {
        let bulk = parse_document(source).blocks;
        snapshot::invariants(source, &bulk);

        for (i, _) in source.char_indices().skip(1) {
            let mut splitter = LineSplitter::new();
            let mut blocks = splitter.feed(&source[..i]);
            blocks.extend(splitter.feed(&source[i..]));
            blocks.extend(splitter.finish());
            assert_eq!(blocks, bulk, "split at byte {i} of {source:?}");
        }

        let mut splitter = LineSplitter::new();
        let mut blocks = vec![];
        for (i, c) in source.char_indices() {
            blocks.extend(splitter.feed(&source[i..i + c.len_utf8()]));
        }
        blocks.extend(splitter.finish());
        assert_eq!(blocks, bulk, "one char per chunk of {source:?}");
    }
}
