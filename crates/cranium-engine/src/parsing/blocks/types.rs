use std::fmt;

use crate::parsing::text::Span;

/// Identifier of a node within one parse generation.
///
/// Ids are a pre-order counter starting at 1 for the root document. They are
/// reassigned on every parse and must not be held across edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub usize);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a node in the block tree.
///
/// Block-level variants come first; the variants from `RawText` onwards only
/// ever appear as children of paragraphs and headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Document,
    Paragraph,
    Heading { level: u8 },
    CodeBlock,
    BlockQuote { depth: usize },
    OrderedList { depth: usize },
    OrderedListItem { depth: usize },
    UnorderedList { depth: usize },
    UnorderedListItem { depth: usize },
    RawText,
    Strong,
    Emphasis,
    StrongEmphasis,
    /// `[text](url)`; `url` indexes the same text as the node's spans.
    Link { url: Span },
    /// `![alt](url)`
    Image { url: Span },
}

impl BlockType {
    /// Whether the cursor may rest in a block of this type.
    pub fn is_cursor_eligible(self) -> bool {
        !self.is_inline()
    }

    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Self::RawText
                | Self::Strong
                | Self::Emphasis
                | Self::StrongEmphasis
                | Self::Link { .. }
                | Self::Image { .. }
        )
    }

    /// Leaf blocks whose content is split into inline spans.
    pub fn takes_inline(self) -> bool {
        matches!(self, Self::Paragraph | Self::Heading { .. })
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            Self::Heading { level } => Some(level),
            _ => None,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("Document"),
            Self::Paragraph => f.write_str("Paragraph"),
            Self::Heading { level } => write!(f, "Heading({level})"),
            Self::CodeBlock => f.write_str("CodeBlock"),
            Self::BlockQuote { depth } => write!(f, "BlockQuote({depth})"),
            Self::OrderedList { depth } => write!(f, "OrderedList({depth})"),
            Self::OrderedListItem { depth } => write!(f, "OrderedListItem({depth})"),
            Self::UnorderedList { depth } => write!(f, "UnorderedList({depth})"),
            Self::UnorderedListItem { depth } => write!(f, "UnorderedListItem({depth})"),
            Self::RawText => f.write_str("RawText"),
            Self::Strong => f.write_str("Strong"),
            Self::Emphasis => f.write_str("Emphasis"),
            Self::StrongEmphasis => f.write_str("StrongEmphasis"),
            Self::Link { .. } => f.write_str("Link"),
            Self::Image { .. } => f.write_str("Image"),
        }
    }
}

/// A node of the parsed document.
///
/// All ranges index the text the tree was parsed from; nothing is copied out
/// of it. Container blocks have no `content` and rely on their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub block_type: BlockType,
    /// Full byte range of the node, including markers and delimiters.
    pub span: Span,
    /// Leaf text: the paragraph line, the heading line, the fenced lines,
    /// or the inner text of an inline span.
    pub content: Option<Span>,
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(block_type: BlockType, span: Span, content: Option<Span>) -> Self {
        Self {
            id: BlockId::default(),
            block_type,
            span,
            content,
            children: Vec::new(),
        }
    }

    pub fn content_bytes<'t>(&self, text: &'t [u8]) -> Option<&'t [u8]> {
        self.content.map(|c| c.slice(text))
    }

    /// The URL of a link or image, sliced from `text`.
    pub fn url_bytes<'t>(&self, text: &'t [u8]) -> Option<&'t [u8]> {
        match self.block_type {
            BlockType::Link { url } | BlockType::Image { url } => Some(url.slice(text)),
            _ => None,
        }
    }

    /// Numbers this node and its descendants in pre-order, starting at 1.
    pub fn assign_ids(&mut self) {
        fn walk(b: &mut Block, next: &mut usize) {
            b.id = BlockId(*next);
            *next += 1;
            for c in &mut b.children {
                walk(c, next);
            }
        }
        let mut next = 1;
        walk(self, &mut next);
    }

    /// The deepest cursor-eligible block whose span holds caret `offset`.
    ///
    /// A caret at a block's `end` is inside it. Children are checked before
    /// their parent, so ties resolve to the deepest block.
    pub fn locate(&self, offset: usize) -> Option<&Block> {
        if !self.span.contains_caret(offset) {
            return None;
        }
        // children are ordered and disjoint; only those starting at or before
        // the caret can hold it
        let upto = self
            .children
            .partition_point(|c| c.span.start <= offset);
        for child in self.children[..upto].iter().rev() {
            if child.span.end < offset {
                break;
            }
            if let Some(found) = child.locate(offset) {
                return Some(found);
            }
        }
        self.block_type.is_cursor_eligible().then_some(self)
    }

    /// Pre-order traversal of this node and everything below it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// The node numbered `id` in this generation's tree.
    pub fn find(&self, id: BlockId) -> Option<&Block> {
        self.descendants().find(|b| b.id == id)
    }
}

/// Iterator returned by [`Block::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let b = self.stack.pop()?;
        self.stack.extend(b.children.iter().rev());
        Some(b)
    }
}
