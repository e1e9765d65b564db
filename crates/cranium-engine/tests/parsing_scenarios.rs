use cranium_engine::parsing::{parse_document, snapshot};
use cranium_engine::{Block, BlockType};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn types(children: &[Block]) -> Vec<BlockType> {
    children.iter().map(|b| b.block_type).collect()
}

#[test]
fn heading_then_paragraph() {
    let text = b"## Title\n\nbody text";
    let root = parse_document(text);
    snapshot::invariants(text, &root);

    assert_eq!(
        types(&root.children),
        vec![BlockType::Heading { level: 2 }, BlockType::Paragraph]
    );
    assert_eq!(root.children[0].content_bytes(text), Some(&b"## Title"[..]));
    assert_eq!(root.children[1].content_bytes(text), Some(&b"body text"[..]));
}

#[test]
fn two_items_one_list() {
    let text = b" - item one\n - item two\n";
    let root = parse_document(text);
    snapshot::invariants(text, &root);

    let list = &root.children[0];
    assert_eq!(list.block_type, BlockType::UnorderedList { depth: 1 });
    assert_eq!(list.children.len(), 2);
    for item in &list.children {
        assert_eq!(item.block_type, BlockType::UnorderedListItem { depth: 1 });
        assert_eq!(types(&item.children), vec![BlockType::Paragraph]);
    }
}

#[rstest]
#[case::plain("just words")]
#[case::nested_everything("> - a\n>   1. b\n>      > c\n")]
#[case::crlf("# a\r\n\r\n- b\r\n")]
#[case::unterminated_fence("```\n# x\n> y")]
#[case::fence_in_quote("> ```\n> code\n> ```\nafter")]
#[case::stray_delimiters("*a **b ***c [d]( ![e")]
#[case::multibyte("# héllo *wörld*\n- ünïcode")]
#[case::only_markers("-\n#\n>\n1.\n")]
#[case::tab_before_quote("\t> x\n>\t> y\n\t>\t>\t")]
fn invariants_hold(#[case] text: &str) {
    let root = parse_document(text.as_bytes());
    snapshot::invariants(text.as_bytes(), &root);
}

/// Pseudo-random byte soup still parses into a valid tree.
#[test]
fn arbitrary_bytes_parse() {
    const ALPHABET: &[u8] = b"ab #>-*_`[]()!\n\r 1.\t\\";
    let mut seed: u64 = 0x5eed;
    for _ in 0..200 {
        let mut text = Vec::new();
        for _ in 0..64 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            text.push(ALPHABET[(seed >> 33) as usize % ALPHABET.len()]);
        }
        let root = parse_document(&text);
        snapshot::invariants(&text, &root);
        assert_eq!(root, parse_document(&text));
    }
}
