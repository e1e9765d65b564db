use crate::parsing::text::{LineRef, Span};

use super::kinds::BlockQuote;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Which prefixes belong to open
/// containers is decided later by the builder, which asks for the first
/// token after stripping a given number of `>` markers.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// Byte span of this line in the text, terminator excluded.
    pub line: Span,
    /// The line bytes, terminator excluded.
    pub text: &'a [u8],
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: usize,
}

/// The first whitespace-delimited token of a line remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Absolute offset of the token.
    pub start: usize,
    /// Offset of the token from the start of its line.
    pub indent: usize,
    pub text: &'a [u8],
    /// Absolute offset of the first non-blank byte after the token,
    /// or the line end.
    pub rest_start: usize,
}

fn is_blank_byte(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

impl<'a> LineClass<'a> {
    /// Finds the first token after stripping `quotes` leading `>` markers.
    ///
    /// Returns `None` when nothing but whitespace remains.
    pub fn token(&self, quotes: usize) -> Option<Token<'a>> {
        let text = self.text;
        let mut i = BlockQuote::strip_n(text, quotes);
        while i < text.len() && is_blank_byte(text[i]) {
            i += 1;
        }
        if i == text.len() {
            return None;
        }
        let mut end = i;
        while end < text.len() && !is_blank_byte(text[end]) {
            end += 1;
        }
        let mut rest = end;
        while rest < text.len() && is_blank_byte(text[rest]) {
            rest += 1;
        }
        Some(Token {
            start: self.line.start + i,
            indent: i,
            text: &text[i..end],
            rest_start: self.line.start + rest,
        })
    }

    /// The line bytes after `quotes` leading `>` markers.
    pub fn after_quotes(&self, quotes: usize) -> &'a [u8] {
        &self.text[BlockQuote::strip_n(self.text, quotes)..]
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let (quote_depth, _) = BlockQuote::strip_prefixes(lr.text);
        LineClass {
            line: lr.span,
            text: lr.text,
            quote_depth,
        }
    }
}
