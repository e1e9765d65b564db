/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix byte.
    pub const PREFIX: u8 = b'>';

    /// Counts every leading `>` marker on a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &[u8]) -> (usize, usize) {
        Self::strip(s, usize::MAX)
    }

    /// Strips at most `n` leading `>` markers, returning the byte offset after them.
    ///
    /// A single space or tab following each marker belongs to the marker. With `n == 0`
    /// nothing is stripped, not even indentation.
    pub fn strip_n(s: &[u8], n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        Self::strip(s, n).1
    }

    fn strip(s: &[u8], limit: usize) -> (usize, usize) {
        let mut i = 0usize;
        let mut depth = 0usize;

        while depth < limit {
            let mut j = i;
            while j < s.len() && is_blank(s[j]) {
                j += 1;
            }
            if j < s.len() && s[j] == Self::PREFIX {
                depth += 1;
                i = j + 1;
                if i < s.len() && is_blank(s[i]) {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }
}

// Must agree with the blanks `LineClass::token` skips, or a marker it
// reports would never be stripped.
fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
