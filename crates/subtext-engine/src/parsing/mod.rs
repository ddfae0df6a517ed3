pub mod blocks;
pub mod inline;
pub mod serialize;
pub mod snapshot;
pub mod stream;
pub mod whitespace;

#[cfg(test)]
mod tests;

use blocks::Block;
use stream::LineSplitter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

impl ParsedDoc {
    /// Serializes the document back to text (see [`serialize::serialize`]).
    #[must_use]
    pub fn to_source(&self) -> String {
        serialize::serialize(&self.blocks)
    }
}

/// Parses a whole document at once.
///
/// Equivalent to feeding `input` to a [`LineSplitter`] as a single chunk and
/// finishing immediately.
pub fn parse_document(input: &str) -> ParsedDoc {
    let mut splitter = LineSplitter::new();
    let mut blocks = splitter.feed(input);
    blocks.extend(splitter.finish());

    ParsedDoc { blocks }
}
