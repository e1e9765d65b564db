use log::trace;

use crate::buffer::GapBuffer;
use crate::parsing::blocks::{Block, BlockId};

use super::lines::{Line, line_index_at};

/// The unit horizontal movement and single-character deletes step by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CursorStep {
    /// Whole UTF-8 code points; offsets are kept on code-point boundaries.
    #[default]
    CodePoint,
    /// Single bytes, with no alignment.
    Byte,
}

impl CursorStep {
    /// Offset one unit before `offset`; 0 stays 0.
    pub fn prev(self, buf: &GapBuffer, offset: usize) -> usize {
        match self {
            Self::CodePoint => buf.prev_char_boundary(offset),
            Self::Byte => offset.min(buf.len()).saturating_sub(1),
        }
    }

    /// Offset one unit after `offset`; the end stays the end.
    pub fn next(self, buf: &GapBuffer, offset: usize) -> usize {
        match self {
            Self::CodePoint => buf.next_char_boundary(offset),
            Self::Byte => (offset + 1).min(buf.len()),
        }
    }

    /// Clamps `offset` to the buffer and, in code-point mode, moves it down to
    /// a boundary.
    pub fn snap(self, buf: &GapBuffer, offset: usize) -> usize {
        match self {
            Self::CodePoint => buf.floor_char_boundary(offset),
            Self::Byte => offset.min(buf.len()),
        }
    }
}

/// Where the caret sits in the line table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorMetrics {
    pub line: usize,
    /// Byte column within the line.
    pub column: usize,
}

/// The caret, resolved against one parse generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
    /// Deepest cursor-eligible block containing `offset`.
    pub active_block: BlockId,
    pub metrics: CursorMetrics,
}

impl Cursor {
    /// Resolves `offset` against a tree and its line table.
    pub fn resolve(offset: usize, root: &Block, lines: &[Line]) -> Self {
        let active_block = root.locate(offset).map_or(root.id, |b| b.id);
        let line = line_index_at(lines, offset);
        let column = lines
            .get(line)
            .map_or(0, |l| offset.saturating_sub(l.span.start));
        Self {
            offset,
            active_block,
            metrics: CursorMetrics { line, column },
        }
    }
}

/// Vertical move target: same byte column on the line above or below, clamped
/// to that line's end.
///
/// Returns `None` when the target line does not exist.
pub fn vertical_target(lines: &[Line], offset: usize, up: bool) -> Option<usize> {
    let idx = line_index_at(lines, offset);
    let current = lines.get(idx)?;
    let column = offset.saturating_sub(current.span.start);
    let target_idx = if up { idx.checked_sub(1)? } else { idx + 1 };
    let target = lines.get(target_idx)?;
    let moved = (target.span.start + column).min(target.span.end);
    trace!("vertical move line {idx} -> {target_idx}, column {column} -> offset {moved}");
    Some(moved)
}
