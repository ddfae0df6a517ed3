//! # Streaming
//!
//! Incremental parsing for input that arrives in chunks.
//!
//! ## Modules
//!
//! - **`splitter`**: `LineSplitter`, the synchronous feed/finish state machine
//! - **`decoder`**: `Utf8ChunkDecoder` for byte chunks that split chars
//!
//! The async adapters here drive a single splitter from a chunk stream,
//! yielding each block as soon as its line is complete. Chunks are consumed
//! strictly in arrival order; dropping the returned stream discards any
//! buffered partial line.

pub mod decoder;
pub mod splitter;

pub use decoder::Utf8ChunkDecoder;
pub use splitter::LineSplitter;

use async_stream::{stream, try_stream};
use futures_core::Stream;
use futures_util::{StreamExt, pin_mut};

use crate::{io::IoError, parsing::blocks::Block};

/// Parses a stream of text chunks into a stream of blocks.
pub fn parse_stream<S>(chunks: S) -> impl Stream<Item = Block>
where
    S: Stream,
    S::Item: AsRef<str>,
{
    stream! {
        let mut splitter = LineSplitter::new();
        pin_mut!(chunks);
        while let Some(chunk) = chunks.next().await {
            for block in splitter.feed(chunk.as_ref()) {
                yield block;
            }
        }
        if let Some(block) = splitter.finish() {
            yield block;
        }
    }
}

/// Parses a stream of byte chunks (e.g. from a socket or file reader).
///
/// Chunks may split multi-byte chars. Source errors and invalid UTF-8 end
/// the stream with an error item.
pub fn parse_byte_stream<S, B>(chunks: S) -> impl Stream<Item = Result<Block, IoError>>
where
    S: Stream<Item = std::io::Result<B>>,
    B: AsRef<[u8]>,
{
    try_stream! {
        let mut decoder = Utf8ChunkDecoder::new();
        let mut splitter = LineSplitter::new();
        pin_mut!(chunks);
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(IoError::from)?;
            let text = decoder.decode(chunk.as_ref())?;
            for block in splitter.feed(&text) {
                yield block;
            }
        }
        decoder.finish()?;
        if let Some(block) = splitter.finish() {
            yield block;
        }
    }
}
