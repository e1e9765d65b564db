/// ATX heading block type: a run of 1–6 `#` as the whole first token.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `token` is a heading marker.
    ///
    /// `#tag` and `#######` are not headings.
    pub fn level(token: &[u8]) -> Option<u8> {
        let n = token.len();
        if (1..=Self::MAX_LEVEL).contains(&n) && token.iter().all(|&b| b == Self::MARKER) {
            Some(n as u8)
        } else {
            None
        }
    }
}
