use std::fmt::Write;

use crate::parsing::{blocks::Block, text::preview};

/// Longest content preview shown per node.
const PREVIEW_MAX: usize = 60;

/// Renders `root` as one line per node, two spaces of indent per level.
///
/// Each line reads `Type #id [start..end]`, followed by a quoted preview of
/// the node's content and, for links and images, the URL.
pub fn normalize(text: &[u8], root: &Block) -> String {
    let mut out = String::new();
    render(&mut out, text, root, 0);
    out
}

fn render(out: &mut String, text: &[u8], b: &Block, level: usize) {
    let _ = write!(
        out,
        "{:indent$}{} #{} [{}..{}]",
        "",
        b.block_type,
        b.id,
        b.span.start,
        b.span.end,
        indent = level * 2
    );
    if let Some(content) = b.content {
        let _ = write!(out, " {:?}", preview(text, content, PREVIEW_MAX));
    }
    if let Some(url) = b.url_bytes(text) {
        let _ = write!(out, " url={:?}", String::from_utf8_lossy(url));
    }
    out.push('\n');
    for child in &b.children {
        render(out, text, child, level + 1);
    }
}
