use crate::parsing::text::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    kinds::CodeFence,
    open::{BlockOpen, try_open},
    types::{Block, BlockType},
};

/// Builds the block tree one classified line at a time.
///
/// For each line the builder first works out how many open containers
/// continue into it, closes the rest, then lets an open fence absorb the line
/// or classifies the line's first token to open new blocks.
pub struct BlockBuilder {
    containers: ContainerPath,
}

impl BlockBuilder {
    /// Starts a tree whose root document covers `[0, len)`.
    pub fn new(len: usize) -> Self {
        Self {
            containers: ContainerPath::new(Block::new(
                BlockType::Document,
                Span::new(0, len),
                None,
            )),
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let keep = self.containers.continuing(c);
        self.containers.truncate(keep);
        self.containers.extend_to(c.line.end);

        if self.containers.in_open_fence() {
            self.consume_fence_line(c);
            return;
        }

        self.open_blocks(c);
    }

    pub fn finish(self) -> Block {
        // EOF: unterminated fences run to the end of input
        self.containers.finish()
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let quotes = self.containers.open_quotes();
        let fence = &mut self.containers.top_mut().block;
        if let Some(content) = fence.content.as_mut() {
            content.end = c.line.end;
        }
        if CodeFence::closes(c.after_quotes(quotes)) {
            // the closing line belongs to the block; pop it now
            let keep = self.containers.len() - 1;
            self.containers.truncate(keep);
        }
    }

    fn open_blocks(&mut self, c: &LineClass) {
        let line_end = c.line.end;
        loop {
            let Some(tok) = c.token(self.containers.open_quotes()) else {
                // blank remainder contributes no node
                return;
            };

            match try_open(&tok) {
                BlockOpen::Quote => {
                    let depth = self.containers.open_quotes() + 1;
                    self.containers.push(
                        Block::new(
                            BlockType::BlockQuote { depth },
                            Span::new(tok.start, line_end),
                            None,
                        ),
                        tok.indent,
                    );
                    // the rest of the line is classified again inside the quote
                }
                BlockOpen::Fence => {
                    let span = Span::new(tok.start, line_end);
                    self.containers
                        .push(Block::new(BlockType::CodeBlock, span, Some(span)), tok.indent);
                    return;
                }
                BlockOpen::List(marker) => {
                    let top = self.containers.top();
                    let sibling = top.indent == tok.indent && marker.continues(top.block.block_type);
                    let depth = if sibling {
                        self.containers.open_lists()
                    } else {
                        let depth = self.containers.open_lists() + 1;
                        self.containers.push(
                            Block::new(marker.list_type(depth), Span::new(tok.start, line_end), None),
                            tok.indent,
                        );
                        depth
                    };

                    let item_span = Span::new(tok.start, line_end);
                    self.containers
                        .push(Block::new(marker.item_type(depth), item_span, None), tok.indent);

                    let content = Span::new(tok.rest_start, line_end);
                    self.containers
                        .attach(Block::new(BlockType::Paragraph, content, Some(content)));
                    return;
                }
                BlockOpen::Heading { level } => {
                    let span = Span::new(tok.start, line_end);
                    self.containers
                        .attach(Block::new(BlockType::Heading { level }, span, Some(span)));
                    return;
                }
                BlockOpen::Paragraph => {
                    let span = Span::new(tok.start, line_end);
                    self.containers
                        .attach(Block::new(BlockType::Paragraph, span, Some(span)));
                    return;
                }
            }
        }
    }
}
