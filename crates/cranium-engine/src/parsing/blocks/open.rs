use super::{
    classify::Token,
    kinds::{BlockQuote, CodeFence, Heading, ListMarker},
};

/// What the first token of a line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Quote,
    Fence,
    List(ListMarker),
    Heading { level: u8 },
    Paragraph,
}

/// Dispatches a line's first token to the block it opens.
///
/// Precedence: quote, fence, list marker, heading, then paragraph.
pub fn try_open(token: &Token) -> BlockOpen {
    if token.text.first() == Some(&BlockQuote::PREFIX) {
        return BlockOpen::Quote;
    }
    if CodeFence::opens(token.text) {
        return BlockOpen::Fence;
    }
    if let Some(marker) = ListMarker::parse(token.text) {
        return BlockOpen::List(marker);
    }
    if let Some(level) = Heading::level(token.text) {
        return BlockOpen::Heading { level };
    }
    BlockOpen::Paragraph
}
