//! Integration tests for the parsing module.
//!
//! Uses snapshot testing of the rendered tree. Fixtures (.md) and snapshots
//! (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, BlockType},
    parse_blocks, parse_document,
    snapshot::{invariants, normalize},
};

// Fixture-based snapshot tests

#[test]
fn fixture_headings_and_emphasis() {
    assert_fixture("headings_and_emphasis");
}

#[test]
fn fixture_nested_lists_and_quotes() {
    assert_fixture("nested_lists_and_quotes");
}

#[test]
fn fixture_code_fence_and_links() {
    assert_fixture("code_fence_and_links");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read(format!("{fixtures_dir}/{name}.md")).unwrap();

    let root = parse_document(&md);
    invariants(&md, &root);

    let rendered = normalize(&md, &root);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, rendered);
    });
}

fn types(children: &[Block]) -> Vec<BlockType> {
    children.iter().map(|b| b.block_type).collect()
}

// Scenario tests

#[test]
fn heading_and_paragraph_scenario() {
    let text = b"## Title\n\nbody text";
    let root = parse_document(text);

    assert_eq!(
        types(&root.children),
        vec![BlockType::Heading { level: 2 }, BlockType::Paragraph]
    );
    assert_eq!(root.children[0].content_bytes(text), Some(&b"## Title"[..]));
    assert_eq!(root.children[1].content_bytes(text), Some(&b"body text"[..]));
}

#[test]
fn unordered_list_scenario() {
    let text = b" - item one\n - item two\n";
    let root = parse_document(text);

    assert_eq!(types(&root.children), vec![BlockType::UnorderedList { depth: 1 }]);
    let list = &root.children[0];
    assert_eq!(
        types(&list.children),
        vec![
            BlockType::UnorderedListItem { depth: 1 },
            BlockType::UnorderedListItem { depth: 1 }
        ]
    );
    for item in &list.children {
        assert_eq!(types(&item.children), vec![BlockType::Paragraph]);
    }
    assert_eq!(
        list.children[1].children[0].content_bytes(text),
        Some(&b"item two"[..])
    );
}

// Invariant tests

/// Every content span slices back to bytes of the exact text parsed.
#[test]
fn content_is_a_subrange_of_the_parsed_text() {
    let text = "> # Quoted *heading*\n- [x](y) and __z__\n```\nraw\n";
    let root = parse_document(text.as_bytes());
    invariants(text.as_bytes(), &root);

    for b in root.descendants() {
        if let Some(c) = b.content {
            assert!(text.get(c.start..c.end).is_some(), "{c:?} not a char range");
        }
    }
}

#[test]
fn reparse_is_structurally_identical() {
    let text = b"# a\n\n> b\n> - c\n  - d\n```\ne";
    assert_eq!(parse_document(text), parse_document(text));
}

#[test]
fn block_parse_leaves_leaves_flat() {
    let root = parse_blocks(b"a *b*");
    assert!(root.children[0].children.is_empty());
    assert_eq!(root.children[0].id.0, 2);
}

#[test]
fn document_ids_number_inline_nodes_in_preorder() {
    let root = parse_document(b"a *b*\n- c");
    let numbered: Vec<_> = root
        .descendants()
        .map(|b| (b.id.0, b.block_type))
        .collect();
    assert_eq!(
        numbered,
        vec![
            (1, BlockType::Document),
            (2, BlockType::Paragraph),
            (3, BlockType::RawText),
            (4, BlockType::Emphasis),
            (5, BlockType::UnorderedList { depth: 1 }),
            (6, BlockType::UnorderedListItem { depth: 1 }),
            (7, BlockType::Paragraph),
            (8, BlockType::RawText),
        ]
    );
}

/// Test unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let text = b"[unclosed and *also unclosed";
    let root = parse_document(text);
    assert_eq!(types(&root.children[0].children), vec![BlockType::RawText]);
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let root = parse_document(b"");
    assert!(root.children.is_empty());
    invariants(b"", &root);
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let root = parse_document(b"\n\n\n");
    assert!(root.children.is_empty());
    assert_eq!(root.span.end, 3);
}

#[test]
fn invalid_utf8_still_parses() {
    let text = b"# \xff\xfe\n- \x80";
    let root = parse_document(text);
    invariants(text, &root);
    assert_eq!(
        types(&root.children),
        vec![BlockType::Heading { level: 1 }, BlockType::UnorderedList { depth: 1 }]
    );
}

#[test]
fn markers_need_trailing_whitespace() {
    let root = parse_document(b"-item\n#tag\n1.5");
    assert_eq!(
        types(&root.children),
        vec![BlockType::Paragraph, BlockType::Paragraph, BlockType::Paragraph]
    );
}

#[test]
fn quote_depth_counts_markers() {
    let root = parse_document(b"> > deep");
    let outer = &root.children[0];
    assert_eq!(outer.block_type, BlockType::BlockQuote { depth: 1 });
    assert_eq!(outer.children[0].block_type, BlockType::BlockQuote { depth: 2 });
}
