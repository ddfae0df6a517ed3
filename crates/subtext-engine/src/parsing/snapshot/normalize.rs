use std::ops::Range;

use serde::Serialize;

use crate::parsing::blocks::Block;

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block for testing.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind as a string (e.g., "Header", "Blank").
    pub kind: String,
    /// Byte range of the line in the source (newline excluded).
    pub range: Range<usize>,
    /// The line text.
    pub text: String,
    /// Spans within this block.
    pub inline: Vec<InlineSnap>,
}

/// Snapshot of a single span for testing.
#[derive(Debug, Serialize)]
pub struct InlineSnap {
    /// Span kind as a string (e.g., "Sigil", "Hyperlink").
    pub kind: String,
    /// Byte range of the span in the source.
    pub range: Range<usize>,
    /// The span text.
    pub text: String,
}

/// Converts parsed blocks into a serializable snapshot for testing.
///
/// Byte ranges are recomputed by laying the blocks back out as lines
/// separated by a single newline each.
pub fn normalize(blocks: &[Block]) -> Snap {
    let mut offset = 0usize;
    let blocks = blocks
        .iter()
        .map(|b| {
            let start = offset;
            let inline = b
                .spans()
                .iter()
                .map(|s| {
                    let range = offset..offset + s.text.len();
                    offset = range.end;
                    InlineSnap {
                        kind: format!("{:?}", s.kind),
                        range,
                        text: s.text.clone(),
                    }
                })
                .collect();
            let range = start..offset;
            offset += 1; // newline

            BlockSnap {
                kind: format!("{:?}", b.kind),
                range,
                text: b.to_text(),
                inline,
            }
        })
        .collect();

    Snap { blocks }
}
