use log::debug;

use crate::buffer::{BufferError, GapBuffer};
use crate::parsing::{
    blocks::{Block, BlockId, BlockType},
    parse_document,
    text::Span,
};

use super::lines::{FontSizeClass, Line, build_line_table};

#[cfg(test)]
thread_local! {
    static FAIL_NEXT_BUILD: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Makes the next [`Generation::build`] on this thread fail as if out of memory.
#[cfg(test)]
pub(crate) fn fail_next_build() {
    FAIL_NEXT_BUILD.with(|f| f.set(true));
}

/// One full parse cycle: the text it read, the tree, and the line table.
///
/// Spans in `root` and `lines` index `text`. A new generation replaces the
/// previous one in a single assignment and dropping the old value frees it all.
#[derive(Debug, Clone)]
pub struct Generation {
    pub id: u64,
    pub text: Vec<u8>,
    pub root: Block,
    pub lines: Vec<Line>,
}

impl Generation {
    /// Snapshots `buffer` and parses it.
    pub fn build(id: u64, buffer: &GapBuffer) -> Result<Self, BufferError> {
        #[cfg(test)]
        if FAIL_NEXT_BUILD.with(|f| f.replace(false)) {
            let overflow = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
            return Err(BufferError::AllocationFailure(overflow));
        }
        let text = buffer.try_snapshot()?;
        let root = parse_document(&text);
        let lines = build_line_table(&text, &root)?;
        debug!(
            "generation {id}: {} bytes, {} top-level blocks, {} lines",
            text.len(),
            root.children.len(),
            lines.len()
        );
        Ok(Self {
            id,
            text,
            root,
            lines,
        })
    }

    /// The generation of an empty text, used once a session is closed.
    pub fn empty(id: u64) -> Self {
        let mut root = Block::new(BlockType::Document, Span::default(), None);
        root.id = BlockId(1);
        Self {
            id,
            text: Vec::new(),
            root,
            lines: vec![Line {
                span: Span::default(),
                block_id: BlockId(1),
                font_size: FontSizeClass::Base,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_matches_parsing_nothing() {
        let built = Generation::build(0, &GapBuffer::new()).unwrap();
        let empty = Generation::empty(0);
        assert_eq!(built.root, empty.root);
        assert_eq!(built.lines, empty.lines);
    }

    #[test]
    fn injected_failure_affects_one_build() {
        let buf = GapBuffer::from_bytes(b"x").unwrap();
        fail_next_build();
        assert!(matches!(
            Generation::build(1, &buf),
            Err(BufferError::AllocationFailure(_))
        ));
        assert!(Generation::build(1, &buf).is_ok());
    }

    #[test]
    fn spans_index_the_snapshot() {
        let buf = GapBuffer::from_bytes(b"# a\n- b").unwrap();
        let g = Generation::build(4, &buf).unwrap();
        assert_eq!(g.id, 4);
        assert_eq!(g.text, b"# a\n- b");
        assert_eq!(g.lines.len(), 2);
        crate::parsing::snapshot::invariants(&g.text, &g.root);
    }
}
