pub mod io;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use io::*;
pub use models::{Peer, Slashlink, SlashlinkError, to_slug};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, BlockContent, BlockKind, SubtextLineClassifier},
    inline::{Span, SpanKind, tokenize},
    parse_document,
    serialize::serialize,
    stream::{LineSplitter, Utf8ChunkDecoder, parse_byte_stream, parse_stream},
};
