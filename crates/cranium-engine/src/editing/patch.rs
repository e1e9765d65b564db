use std::ops::Range;

/// Result of applying an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte range in the new text covered by the edit. Empty for deletions.
    pub changed: Range<usize>,
    /// Cursor offset after the edit
    pub cursor: usize,
    /// Generation the edit produced; unchanged for no-op edits
    pub generation: u64,
}
