use crate::parsing::whitespace::is_subtext_whitespace;

/// Blank line type (marker struct).
///
/// A blank is an empty or whitespace-only line that doesn't open with a
/// sigil. Its whole text is kept as a single empty-space span.
pub struct Blank;

impl Blank {
    pub fn is_blank(line: &str) -> bool {
        line.chars().all(is_subtext_whitespace)
    }
}
