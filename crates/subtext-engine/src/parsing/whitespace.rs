//! The single whitespace definition shared by classification, tokenizing and
//! the invariant checks.
//!
//! Subtext whitespace follows the ECMAScript `WhiteSpace` and
//! `LineTerminator` sets rather than Unicode `White_Space`: U+FEFF (BOM)
//! counts, U+0085 (NEL) does not.

const BOM: char = '\u{FEFF}';
const NEL: char = '\u{85}';

pub fn is_subtext_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != NEL) || c == BOM
}

/// Strips leading Subtext whitespace.
pub fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_subtext_whitespace)
}
