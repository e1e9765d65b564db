/// Backslash escapes: the escaped byte is literal text.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';
    pub const ESCAPABLE: &'static [u8] = b"\\*_[]()!#`";

    pub fn escapes(b: u8) -> bool {
        Self::ESCAPABLE.contains(&b)
    }
}
