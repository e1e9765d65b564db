use crate::parsing::blocks::BlockType;

/// Emphasis delimiter runs with owned delimiter constants.
///
/// A run of one, two or three `*` or `_` opens emphasis, strong, or
/// strong+emphasis; it closes at the next run of the same byte with exactly
/// the same length.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Longer runs are literal text.
    pub const MAX_RUN: usize = 3;

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// The node type produced by a matched run of length `n`.
    pub fn block_type(n: usize) -> Option<BlockType> {
        match n {
            1 => Some(BlockType::Emphasis),
            2 => Some(BlockType::Strong),
            3 => Some(BlockType::StrongEmphasis),
            _ => None,
        }
    }
}
