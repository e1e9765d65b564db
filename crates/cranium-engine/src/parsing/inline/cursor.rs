/// Read position inside one block's content bytes.
///
/// `s` is the content slice and `base` its offset in the full text, so
/// `pos()` is always an absolute offset usable in a [`Span`](crate::parsing::text::Span).
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a [u8],
    pub base: usize,
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a [u8], base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute offset of the next unread byte.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, k: usize) -> Option<u8> {
        self.s.get(self.i + k).copied()
    }

    /// Length of the run of `b` starting at the current position.
    pub fn run_len(&self, b: u8) -> usize {
        self.s
            .get(self.i..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| c == b).count())
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Skips `n` bytes; may run past the end, which reads as eof.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
