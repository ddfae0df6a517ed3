use crate::parsing::blocks::{Block, SubtextLineClassifier};

/// Reassembles arbitrary text chunks into lines and classifies each line as
/// soon as it is complete.
///
/// The only state is the buffered tail of a line whose newline hasn't arrived
/// yet. Chunk boundaries never affect output: feeding `c1..cn` then calling
/// [`LineSplitter::finish`] yields the same blocks as a bulk parse of the
/// concatenation.
#[derive(Debug, Default)]
pub struct LineSplitter {
    classifier: SubtextLineClassifier,
    buffer: String,
}

impl LineSplitter {
    /// The only line terminator Subtext splits on.
    pub const NEWLINE: char = '\n';

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` and returns the blocks for every line it completed.
    pub fn feed(&mut self, chunk: &str) -> Vec<Block> {
        self.buffer.push_str(chunk);

        let mut blocks = vec![];
        let mut consumed = 0usize;
        while let Some(i) = self.buffer[consumed..].find(Self::NEWLINE) {
            let line = &self.buffer[consumed..consumed + i];
            log::trace!("line complete: {line:?}");
            blocks.push(self.classifier.classify(line));
            consumed += i + Self::NEWLINE.len_utf8();
        }
        self.buffer.replace_range(..consumed, "");

        blocks
    }

    /// Flushes the trailing partial line, if any, at end of input.
    ///
    /// An empty buffer emits nothing, so input ending in a newline does not
    /// produce an extra blank block.
    pub fn finish(self) -> Option<Block> {
        if self.buffer.is_empty() {
            return None;
        }
        log::trace!("flushing final line: {:?}", self.buffer);
        Some(self.classifier.classify(&self.buffer))
    }

    /// Text buffered since the last newline.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer
    }
}
