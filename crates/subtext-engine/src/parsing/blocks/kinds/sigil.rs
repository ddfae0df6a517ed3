use crate::parsing::blocks::types::BlockKind;

/// Sigil block types with owned prefix constants.
///
/// All sigil knowledge lives here, not scattered in classifier code.
pub struct Sigil;

impl Sigil {
    pub const HEADER: char = '#';
    pub const LIST: char = '-';
    pub const QUOTE: char = '>';

    /// Returns the block kind a line opens with, if it starts with a sigil.
    ///
    /// # Returns
    /// - `kind`: The sigil block kind
    /// - `len`: Byte length of the sigil (always 1, sigils are ASCII)
    pub fn detect(line: &str) -> Option<(BlockKind, usize)> {
        let c = line.chars().next()?;
        let kind = match c {
            Self::HEADER => BlockKind::Header,
            Self::LIST => BlockKind::List,
            Self::QUOTE => BlockKind::Quote,
            _ => return None,
        };
        Some((kind, c.len_utf8()))
    }
}
