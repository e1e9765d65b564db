use crate::parsing::blocks::{Block, BlockId, BlockType};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The root is a document spanning the whole text
/// - All spans are within text bounds and every content span lies inside its node's span
/// - Children lie inside their parent, in order and without overlap
/// - Ids number the tree in pre-order from 1
/// - Inline nodes only sit under paragraphs and headings, and have no children
/// - Leaf content never crosses a line terminator; code block content ends at a line end
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &[u8], root: &Block) {
    let n = text.len();
    assert_eq!(root.block_type, BlockType::Document, "root is not a document");
    assert!(
        root.span.start == 0 && root.span.end == n,
        "root span {:?} does not cover text (len: {})",
        root.span,
        n
    );

    let mut next_id = 1;
    check_node(text, root, &mut next_id);
}

fn check_node(text: &[u8], b: &Block, next_id: &mut usize) {
    let n = text.len();
    assert_eq!(b.id, BlockId(*next_id), "ids are not pre-order at {:?}", b.span);
    *next_id += 1;

    assert!(
        b.span.start <= b.span.end && b.span.end <= n,
        "block span out of bounds: {:?} (text len: {})",
        b.span,
        n
    );

    if let Some(content) = b.content {
        assert!(
            b.span.encloses(content) && content.start <= content.end,
            "content span not contained in block span: content {:?}, block {:?}",
            content,
            b.span
        );
        let bytes = content.slice(text);
        if b.block_type == BlockType::CodeBlock {
            let rest = &text[content.end..];
            assert!(
                matches!(rest, [] | [b'\n', ..] | [b'\r'] | [b'\r', b'\n', ..]),
                "code block content does not end at a line end: {content:?}"
            );
        } else {
            assert!(
                !bytes.contains(&b'\n'),
                "content crosses a line: {content:?} ({})",
                b.block_type
            );
        }
    }

    if let BlockType::Link { url } | BlockType::Image { url } = b.block_type {
        assert!(b.span.encloses(url), "url {url:?} outside {:?}", b.span);
    }

    if b.block_type.is_inline() {
        assert!(b.children.is_empty(), "inline node with children at {:?}", b.span);
    }

    let mut prev_end = b.span.start;
    for child in &b.children {
        assert!(
            b.span.encloses(child.span),
            "child span {:?} outside parent {:?}",
            child.span,
            b.span
        );
        assert!(
            child.span.start >= prev_end,
            "child span {:?} overlaps previous sibling ending at {}",
            child.span,
            prev_end
        );
        assert!(
            !child.block_type.is_inline() || b.block_type.takes_inline(),
            "inline {} under {}",
            child.block_type,
            b.block_type
        );
        prev_end = child.span.end;
        check_node(text, child, next_id);
    }
}
