//! # Inline Kinds
//!
//! Inline-specific types that own their syntax prefixes.
//!
//! ## Types
//!
//! - **`Hyperlink`**: `LEAD = 'h'`, followed by `ttp:/` or `ttps:/`
//! - **`SlashlinkPrefix`**: `SIGIL = '/'`
//!
//! ## Design Principle
//!
//! All prefix constants live here, not scattered in tokenizer code.
//! The tokenizer calls these predicates; it never hardcodes `http` or `/`.

pub mod hyperlink;
pub mod slashlink;

pub use hyperlink::Hyperlink;
pub use slashlink::SlashlinkPrefix;
