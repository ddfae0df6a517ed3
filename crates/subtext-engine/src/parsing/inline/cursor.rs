/// A cursor for char-by-char inline tokenizing with lookahead and lookbehind.
///
/// Operates over Unicode codepoints rather than bytes. The cursor starts one
/// position before the first char; each [`CharCursor::advance`] moves exactly
/// one position forward and makes that char current.
#[derive(Debug, Clone)]
pub struct CharCursor {
    chars: Vec<char>,
    /// Index of the current char plus one (0 means "before the first char").
    pos: usize,
}

impl CharCursor {
    /// Creates a new cursor positioned before the first char of `s`.
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    /// Advances by one char, returning it, or `None` once exhausted.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    /// Returns up to `n` chars following the current one without moving.
    pub fn lookahead(&self, n: usize) -> &[char] {
        let start = self.pos.min(self.chars.len());
        let end = start.saturating_add(n).min(self.chars.len());
        &self.chars[start..end]
    }

    /// Returns the char immediately before the current one.
    ///
    /// `None` when the cursor sits on the first char or hasn't advanced yet.
    pub fn previous(&self) -> Option<char> {
        self.pos
            .checked_sub(2)
            .and_then(|i| self.chars.get(i).copied())
    }
}
