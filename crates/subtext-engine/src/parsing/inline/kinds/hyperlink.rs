use crate::parsing::inline::cursor::CharCursor;

/// Bare hyperlink inline type with owned prefix constants.
///
/// A hyperlink opens at an `h` whose lookahead spells out the rest of
/// `http:/` or `https:/`. Nothing past the prefix is validated.
pub struct Hyperlink;

impl Hyperlink {
    /// The char that may open a hyperlink.
    pub const LEAD: char = 'h';
    /// Lookahead after [`Self::LEAD`] for `http:/`.
    pub const HTTP_TAIL: &'static [char] = &['t', 't', 'p', ':', '/'];
    /// Lookahead after [`Self::LEAD`] for `https:/`.
    pub const HTTPS_TAIL: &'static [char] = &['t', 't', 'p', 's', ':', '/'];

    /// Returns true if `current` (the char the cursor just advanced to)
    /// starts a hyperlink.
    pub fn opens_at(current: char, cur: &CharCursor) -> bool {
        current == Self::LEAD
            && (cur.lookahead(Self::HTTP_TAIL.len()) == Self::HTTP_TAIL
                || cur.lookahead(Self::HTTPS_TAIL.len()) == Self::HTTPS_TAIL)
    }
}
