/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognised. A fence opens on any token that starts
/// with three backticks (so an info string such as ```` ```rust ```` is allowed)
/// and closes on a line that is exactly three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static [u8; 3] = b"```";

    /// Whether a line's first token opens a fence.
    pub fn opens(token: &[u8]) -> bool {
        token.starts_with(Self::FENCE)
    }

    /// Whether a line remainder (quote prefixes already stripped) closes a fence.
    ///
    /// Surrounding whitespace, including a stray `\r`, is ignored.
    pub fn closes(remainder: &[u8]) -> bool {
        remainder.trim_ascii() == Self::FENCE
    }
}
