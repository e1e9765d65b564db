use super::{
    classify::LineClass,
    kinds::ListMarker,
    types::{Block, BlockType},
};

fn is_list_like(ty: BlockType) -> bool {
    matches!(
        ty,
        BlockType::UnorderedList { .. }
            | BlockType::OrderedList { .. }
            | BlockType::UnorderedListItem { .. }
            | BlockType::OrderedListItem { .. }
    )
}

/// An open block on the container stack.
#[derive(Debug)]
pub struct Frame {
    pub block: Block,
    /// Column of the marker that opened this frame (lists and items).
    pub indent: usize,
}

/// The stack of open blocks, rooted at the document.
///
/// Frames own their blocks; popping a frame attaches its block to the new
/// top, so the tree is assembled as containers close.
#[derive(Debug)]
pub struct ContainerPath(Vec<Frame>);

impl ContainerPath {
    pub fn new(root: Block) -> Self {
        Self(vec![Frame {
            block: root,
            indent: 0,
        }])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn top(&self) -> &Frame {
        &self.0[self.0.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut Frame {
        let last = self.0.len() - 1;
        &mut self.0[last]
    }

    pub fn push(&mut self, block: Block, indent: usize) {
        self.0.push(Frame { block, indent });
    }

    /// Attaches a finished block as the last child of the top frame.
    pub fn attach(&mut self, block: Block) {
        self.top_mut().block.children.push(block);
    }

    /// Pops frames until `keep` remain. The root is never popped.
    pub fn truncate(&mut self, keep: usize) {
        let keep = keep.max(1);
        while self.0.len() > keep {
            if let Some(frame) = self.0.pop() {
                self.attach(frame.block);
            }
        }
    }

    /// Closes everything and returns the root.
    pub fn finish(mut self) -> Block {
        self.truncate(1);
        // the root frame is never popped by truncate
        self.0.swap_remove(0).block
    }

    pub fn open_quotes(&self) -> usize {
        self.quotes_below(self.0.len())
    }

    pub fn open_lists(&self) -> usize {
        self.0
            .iter()
            .filter(|f| {
                matches!(
                    f.block.block_type,
                    BlockType::OrderedList { .. } | BlockType::UnorderedList { .. }
                )
            })
            .count()
    }

    /// Number of quote frames strictly below index `i`.
    fn quotes_below(&self, i: usize) -> usize {
        self.0[..i]
            .iter()
            .filter(|f| matches!(f.block.block_type, BlockType::BlockQuote { .. }))
            .count()
    }

    pub fn in_open_fence(&self) -> bool {
        matches!(self.top().block.block_type, BlockType::CodeBlock)
    }

    /// How many frames, counted from the root, continue into `line`.
    ///
    /// Stops at the first frame that does not continue; everything above it
    /// is closed along with it.
    pub fn continuing(&self, line: &LineClass) -> usize {
        let fence_open = self.in_open_fence();
        for (i, frame) in self.0.iter().enumerate().skip(1) {
            let token = || line.token(self.quotes_below(i));
            let continues = match frame.block.block_type {
                BlockType::BlockQuote { depth } => line.quote_depth >= depth,
                BlockType::CodeBlock => true,
                // lists around an open fence hold until the fence closes
                _ if fence_open && is_list_like(frame.block.block_type) => true,
                BlockType::UnorderedList { .. } | BlockType::OrderedList { .. } => {
                    token().is_some_and(|t| {
                        t.indent > frame.indent
                            || (t.indent == frame.indent
                                && ListMarker::parse(t.text)
                                    .is_some_and(|m| m.continues(frame.block.block_type)))
                    })
                }
                BlockType::UnorderedListItem { .. } | BlockType::OrderedListItem { .. } => {
                    token().is_some_and(|t| t.indent > frame.indent)
                }
                _ => false,
            };
            if !continues {
                return i;
            }
        }
        self.0.len()
    }

    /// Extends the span of every frame to cover `end`.
    pub fn extend_to(&mut self, end: usize) {
        for frame in self.0.iter_mut().skip(1) {
            frame.block.span.end = frame.block.span.end.max(end);
        }
    }
}
