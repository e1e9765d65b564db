use std::collections::TryReserveError;

use log::trace;

/// Errors returned by [`GapBuffer`] mutations.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("offset {pos} is out of bounds (length {len})")]
    OutOfBounds { pos: usize, len: usize },
    #[error("failed to grow text buffer: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// A byte gap buffer: one backing array with a movable empty region.
///
/// Logical layout is `buf[..gap_start] ++ buf[gap_end..]`. Edits move the gap to
/// the edit position first, so runs of edits at the same place (typing) cost
/// O(1) amortized while a jump across the document costs O(distance).
///
/// The buffer is byte-oriented. It never splits or validates UTF-8 itself;
/// callers supply code-point aligned offsets.
#[derive(Clone)]
pub struct GapBuffer {
    buf: Vec<u8>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            gap_start: 0,
            gap_end: 0,
        }
    }

    /// Creates a buffer holding `text`, with the gap at the end.
    pub fn from_bytes(text: &[u8]) -> Result<Self, BufferError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(text.len())?;
        buf.extend_from_slice(text);
        let len = buf.len();
        Ok(Self {
            buf,
            gap_start: len,
            gap_end: len,
        })
    }

    /// Logical length in bytes (everything except the gap).
    pub fn len(&self) -> usize {
        self.buf.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total physical size of the backing array.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the byte at logical index `i`, or `None` past the end.
    pub fn byte_at(&self, i: usize) -> Option<u8> {
        if i < self.gap_start {
            Some(self.buf[i])
        } else {
            self.buf.get(i + self.gap_len()).copied()
        }
    }

    /// The logical contents as the two runs either side of the gap.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        (&self.buf[..self.gap_start], &self.buf[self.gap_end..])
    }

    /// Copies the logical contents into one contiguous vector.
    pub fn snapshot(&self) -> Vec<u8> {
        let (front, back) = self.as_slices();
        [front, back].concat()
    }

    /// Like [`snapshot`](Self::snapshot) but reports allocation failure instead of aborting.
    pub fn try_snapshot(&self) -> Result<Vec<u8>, BufferError> {
        let (front, back) = self.as_slices();
        let mut out = Vec::new();
        out.try_reserve_exact(front.len() + back.len())?;
        out.extend_from_slice(front);
        out.extend_from_slice(back);
        Ok(out)
    }

    /// Inserts `text` so that its first byte lands at logical offset `pos`.
    pub fn insert(&mut self, pos: usize, text: &[u8]) -> Result<(), BufferError> {
        self.check(pos)?;
        if text.is_empty() {
            return Ok(());
        }
        if self.gap_len() < text.len() {
            self.grow(text.len())?;
        }
        self.move_gap(pos);
        self.buf[self.gap_start..self.gap_start + text.len()].copy_from_slice(text);
        self.gap_start += text.len();
        Ok(())
    }

    /// Removes the logical range `[start, end)` by widening the gap over it.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<(), BufferError> {
        self.check(end)?;
        if start > end {
            return Err(BufferError::OutOfBounds {
                pos: start,
                len: self.len(),
            });
        }
        self.move_gap(start);
        self.gap_end += end - start;
        Ok(())
    }

    /// Nearest code-point boundary strictly before `pos` (0 stays 0).
    pub fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut p = pos.min(self.len());
        if p == 0 {
            return 0;
        }
        p -= 1;
        while p > 0 && self.byte_at(p).is_some_and(is_continuation) {
            p -= 1;
        }
        p
    }

    /// Nearest code-point boundary strictly after `pos` (the end stays the end).
    pub fn next_char_boundary(&self, pos: usize) -> usize {
        let len = self.len();
        if pos >= len {
            return len;
        }
        let mut p = pos + 1;
        while p < len && self.byte_at(p).is_some_and(is_continuation) {
            p += 1;
        }
        p
    }

    /// Largest code-point boundary `<= pos`, with `pos` clamped to the length.
    pub fn floor_char_boundary(&self, pos: usize) -> usize {
        let mut p = pos.min(self.len());
        while p > 0 && self.byte_at(p).is_some_and(is_continuation) {
            p -= 1;
        }
        p
    }

    fn check(&self, pos: usize) -> Result<(), BufferError> {
        if pos > self.len() {
            return Err(BufferError::OutOfBounds {
                pos,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Relocates the gap so that it starts at logical offset `pos`.
    fn move_gap(&mut self, pos: usize) {
        if pos < self.gap_start {
            let n = self.gap_start - pos;
            self.buf.copy_within(pos..self.gap_start, self.gap_end - n);
            self.gap_start = pos;
            self.gap_end -= n;
        } else if pos > self.gap_start {
            let n = pos - self.gap_start;
            self.buf
                .copy_within(self.gap_end..self.gap_end + n, self.gap_start);
            self.gap_start += n;
            self.gap_end += n;
        }
    }

    /// Reallocates so the gap can hold at least `extra` more bytes.
    ///
    /// New capacity is `max(needed, capacity * 3 / 2)`. The current buffer is
    /// untouched if the allocation fails.
    fn grow(&mut self, extra: usize) -> Result<(), BufferError> {
        let cap = self.capacity();
        let needed = self.len() + extra;
        let new_cap = needed.max(cap / 2 + cap);

        let mut next = Vec::new();
        next.try_reserve_exact(new_cap)?;
        let back_len = cap - self.gap_end;
        next.extend_from_slice(&self.buf[..self.gap_start]);
        next.resize(new_cap - back_len, 0);
        next.extend_from_slice(&self.buf[self.gap_end..]);

        trace!("gap buffer grew {cap} -> {new_cap} bytes");
        self.gap_end = new_cap - back_len;
        self.buf = next;
        Ok(())
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapBuffer")
            .field("text", &String::from_utf8_lossy(&self.snapshot()))
            .field("gap", &(self.gap_start..self.gap_end))
            .finish()
    }
}

fn is_continuation(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}
