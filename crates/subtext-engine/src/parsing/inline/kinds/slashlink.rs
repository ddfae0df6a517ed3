/// Slashlink inline type (prefix marker).
///
/// Any `/` at a word boundary opens a slashlink; the link runs until the
/// next whitespace. Structured peer/slug parsing lives in
/// [`crate::models::Slashlink`].
pub struct SlashlinkPrefix;

impl SlashlinkPrefix {
    /// The char that opens a slashlink.
    pub const SIGIL: char = '/';

    pub fn opens_at(current: char) -> bool {
        current == Self::SIGIL
    }
}
