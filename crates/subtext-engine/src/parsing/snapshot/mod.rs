//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable `Snap` format with
//!   byte ranges into the source, for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (round trip,
//!   sigil placement, leading whitespace separation, links free of whitespace)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is defined by fixture snapshots
//! plus invariant checks run on every parse, rather than a formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
