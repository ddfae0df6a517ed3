//! # Block Classification
//!
//! Line-at-a-time block classification. Subtext has no nested or multi-line
//! blocks: every line maps to exactly one [`Block`].
//!
//! ## Classification
//!
//! | Leading char | Kind |
//! |---|---|
//! | `#` | Header |
//! | `-` | List |
//! | `>` | Quote |
//! | (whitespace only) | Blank |
//! | anything else | Paragraph |
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`, `BlockContent`)
//! - **`kinds`**: Block-specific types with owned sigils (Sigil, Blank)
//! - **`classify`**: `SubtextLineClassifier` produces a `Block` per line
//!
//! ## Key Invariants
//!
//! - A block's span texts concatenate to its source line exactly
//! - Leading whitespace is always its own `EmptySpace` span

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::SubtextLineClassifier;
pub use types::{Block, BlockContent, BlockKind};
