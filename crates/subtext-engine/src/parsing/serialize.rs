//! Block-to-text serialization: the inverse of splitting and classifying.

use std::fmt;

use super::{blocks::Block, inline::Span};

impl Block {
    /// Reconstructs the source line this block was classified from.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.spans().iter().map(Span::as_str).collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spans().iter().try_for_each(|span| f.write_str(span.as_str()))
    }
}

/// Joins the blocks' lines with `\n`, without a trailing newline.
pub fn serialize(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        block.spans().iter().for_each(|span| out.push_str(span.as_str()));
    }
    out
}
