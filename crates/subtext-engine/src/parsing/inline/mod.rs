//! # Inline Tokenizing
//!
//! Cursor-based span tokenizing for the content of a single line.
//!
//! ## Architecture
//!
//! Inline tokenizing is separate from line classification: the classifier
//! strips the sigil and leading whitespace, then hands the remainder here.
//!
//! The tokenizer walks codepoints with a lookahead/lookbehind cursor and
//! only opens link spans at word boundaries (start of text or after
//! whitespace). Everything else accumulates into text spans.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: Inline prefix types with owned constants (Hyperlink, SlashlinkPrefix)
//! - **`cursor`**: `CharCursor` with `advance`, `lookahead` and `previous`
//! - **`parser`**: `tokenize()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind};
