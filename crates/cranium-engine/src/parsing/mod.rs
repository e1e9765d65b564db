//! # Parsing
//!
//! Full, non-incremental parsing of a text generation into a [`Block`] tree.
//!
//! Parsing works on bytes so it is total: any input, valid UTF-8 or not,
//! produces a tree. Every span in the tree indexes the exact bytes passed in.

pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, BlockType, MarkdownLineClassifier, kinds::Heading};
use text::{Span, lines_with_spans};

/// Parses block structure only; leaves keep their flat content.
pub fn parse_blocks(text: &[u8]) -> Block {
    let mut root = build_blocks(text);
    root.assign_ids();
    root
}

/// Parses blocks, then splits every paragraph and heading into inline spans.
///
/// Ids are assigned last, so inline nodes are numbered too.
pub fn parse_document(text: &[u8]) -> Block {
    let mut root = build_blocks(text);
    attach_inline(text, &mut root);
    root.assign_ids();
    root
}

fn build_blocks(text: &[u8]) -> Block {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(text.len());

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}

fn attach_inline(text: &[u8], b: &mut Block) {
    if b.block_type.takes_inline() {
        if let Some(range) = inline_range(text, b) {
            b.children = inline::parse_inline(text, range);
        }
        return;
    }
    for child in &mut b.children {
        attach_inline(text, child);
    }
}

/// The part of a leaf handed to the inline parser: a heading's `#` run and the
/// blanks after it are markup, not text.
fn inline_range(text: &[u8], b: &Block) -> Option<Span> {
    let content = b.content?;
    if !matches!(b.block_type, BlockType::Heading { .. }) {
        return Some(content);
    }
    let bytes = content.slice(text);
    let hashes = bytes.iter().take_while(|&&c| c == Heading::MARKER).count();
    let blanks = bytes[hashes..]
        .iter()
        .take_while(|&&c| c == b' ' || c == b'\t')
        .count();
    let skip = hashes + blanks;
    Some(Span::new(content.start + skip, content.end))
}
