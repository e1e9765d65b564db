use crate::parsing::{
    blocks::{Block, BlockType},
    text::Span,
};

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Escape, Link},
};

/// Parses the bytes of `content` into inline nodes.
///
/// # Arguments
/// - `text`: The whole text of the parse generation
/// - `content`: The range of a leaf block to split (one line, terminator excluded)
///
/// # Precedence
/// Escapes first, then images, links, and emphasis runs. Anything that fails
/// to match is literal text; the cursor is restored on every failed attempt.
///
/// # Returns
/// Inline nodes in source order. Adjacent literal bytes are coalesced into
/// one `RawText`; the backslash of an escape is left out of every node.
pub fn parse_inline(text: &[u8], content: Span) -> Vec<Block> {
    let mut cur = Cursor::new(content.slice(text), content.start);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<Block>, start: usize, end: usize) {
        if end > start {
            let sp = Span::new(start, end);
            out.push(Block::new(BlockType::RawText, sp, Some(sp)));
        }
    }

    while !cur.eof() {
        if cur.peek() == Some(Escape::BACKSLASH) && cur.peek_at(1).is_some_and(Escape::escapes) {
            flush_text(&mut out, text_start, cur.pos());
            cur.bump();
            text_start = cur.pos();
            cur.bump();
            continue;
        }
        if let Some(node) = try_parse_link(&mut cur) {
            flush_text(&mut out, text_start, node.span.start);
            text_start = node.span.end;
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_emphasis(&mut cur) {
            flush_text(&mut out, text_start, node.span.start);
            text_start = node.span.end;
            out.push(node);
            continue;
        }
        // an unmatched delimiter run is literal as a whole
        match cur.peek() {
            Some(b) if Emphasis::is_delimiter(b) => cur.bump_n(cur.run_len(b)),
            _ => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse `[text](url)` or `![alt](url)` at the current position.
///
/// Neither part may contain its own closing delimiter. On failure, cursor
/// position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Block> {
    let image = cur.peek() == Some(Link::IMAGE_BANG);
    let open_at = usize::from(image);
    if cur.peek_at(open_at) != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open_at + 1);
    let text_start = cur.pos();
    let text_end = match scan_to(cur, Link::TEXT_CLOSE) {
        Some(end) => end,
        None => {
            *cur = saved;
            return None;
        }
    };
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let url_start = cur.pos();
    let url_end = match scan_to(cur, Link::URL_CLOSE) {
        Some(end) => end,
        None => {
            *cur = saved;
            return None;
        }
    };
    cur.bump(); // )

    let url = Span::new(url_start, url_end);
    let block_type = if image {
        BlockType::Image { url }
    } else {
        BlockType::Link { url }
    };
    Some(Block::new(
        block_type,
        Span::new(start, cur.pos()),
        Some(Span::new(text_start, text_end)),
    ))
}

/// Advances to the next `close` byte and returns its position, stepping over
/// escaped bytes. Returns `None` at end of input.
fn scan_to(cur: &mut Cursor<'_>, close: u8) -> Option<usize> {
    while let Some(b) = cur.peek() {
        if b == close {
            return Some(cur.pos());
        }
        if b == Escape::BACKSLASH && cur.peek_at(1).is_some_and(Escape::escapes) {
            cur.bump();
        }
        cur.bump();
    }
    None
}

/// Attempts to parse an emphasis run at the current position.
///
/// A run of length n closes at the next run of the same byte with length
/// exactly n, provided the inner range is non-empty. Runs of other lengths
/// are skipped whole. On failure, cursor position is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Block> {
    let delim = cur.peek().filter(|&b| Emphasis::is_delimiter(b))?;
    let n = cur.run_len(delim);
    let block_type = Emphasis::block_type(n)?;

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(n);
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Escape::BACKSLASH && cur.peek_at(1).is_some_and(Escape::escapes) {
            cur.bump_n(2);
            continue;
        }
        if b != delim {
            cur.bump();
            continue;
        }
        let m = cur.run_len(delim);
        if m == n && cur.pos() > inner_start {
            let inner_end = cur.pos();
            cur.bump_n(n);
            return Some(Block::new(
                block_type,
                Span::new(start, cur.pos()),
                Some(Span::new(inner_start, inner_end)),
            ));
        }
        cur.bump_n(m);
    }

    *cur = saved;
    None
}
