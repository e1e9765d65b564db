/// A byte range `[start, end)` into the text of one parse generation.
///
/// Parsed nodes store spans rather than copied text: slicing the generation's
/// text with any span reproduces the exact source bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Caret containment: a caret sitting right after the last byte is still
    /// inside the span, so this is `start <= offset <= end`.
    #[must_use]
    pub fn contains_caret(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// True if `other` lies entirely within `self`.
    #[must_use]
    pub fn encloses(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Borrows the bytes of this span from `text`.
    ///
    /// # Panics
    /// Panics if the span is out of bounds for `text`.
    pub fn slice(self, text: &[u8]) -> &[u8] {
        &text[self.start..self.end]
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(sp: Span) -> Self {
        sp.start..sp.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_containment_includes_end() {
        let sp = Span::new(2, 5);
        assert!(sp.contains_caret(5));
        assert!(!sp.contains_caret(6));
        assert!(Span::new(0, 0).contains_caret(0));
    }

    #[test]
    fn inverted_span_is_empty() {
        let sp = Span::new(5, 2);
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }

    #[test]
    fn encloses_is_inclusive_at_both_ends() {
        let outer = Span::new(2, 9);
        assert!(outer.encloses(Span::new(2, 4)));
        assert!(outer.encloses(Span::new(6, 9)));
        assert!(outer.encloses(outer));
        assert!(!Span::new(2, 4).encloses(outer));
    }
}
