use std::collections::TryReserveError;

use crate::parsing::{
    blocks::{Block, BlockId},
    text::{Span, lines_with_spans},
};

/// The font size a line renders at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontSizeClass {
    #[default]
    Base,
    /// Heading level 1..=6
    Heading(u8),
}

/// One row of the line table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// `[start, end)` of the line, terminator excluded.
    pub span: Span,
    /// Deepest cursor-eligible block at the line's end.
    pub block_id: BlockId,
    pub font_size: FontSizeClass,
}

/// Builds the line table for one generation.
///
/// There is always at least one line, and exactly `1 + count('\n')` of them.
pub fn build_line_table(text: &[u8], root: &Block) -> Result<Vec<Line>, TryReserveError> {
    let count = 1 + text.iter().filter(|&&b| b == b'\n').count();
    let mut lines = Vec::new();
    lines.try_reserve_exact(count)?;

    for lr in lines_with_spans(text) {
        let owner = root.locate(lr.span.end).unwrap_or(root);
        let font_size = match owner.block_type.heading_level() {
            Some(level) => FontSizeClass::Heading(level),
            None => FontSizeClass::Base,
        };
        lines.push(Line {
            span: lr.span,
            block_id: owner.id,
            font_size,
        });
    }
    Ok(lines)
}

/// Index of the line holding caret `offset`: the last line starting at or
/// before it.
pub fn line_index_at(lines: &[Line], offset: usize) -> usize {
    lines
        .partition_point(|l| l.span.start <= offset)
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    fn table(text: &str) -> Vec<Line> {
        let root = parse_document(text.as_bytes());
        build_line_table(text.as_bytes(), &root).unwrap()
    }

    #[test]
    fn heading_lines_get_heading_sizes() {
        let lines = table("## Title\n\nbody text");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].font_size, FontSizeClass::Heading(2));
        assert_eq!(lines[1].font_size, FontSizeClass::Base);
        assert_eq!(lines[2].font_size, FontSizeClass::Base);
        assert_eq!(lines[0].block_id, BlockId(2));
        // the blank line belongs to the document itself
        assert_eq!(lines[1].block_id, BlockId(1));
    }

    #[test]
    fn empty_text_has_one_empty_line() {
        let lines = table("");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].span, Span::new(0, 0));
        assert_eq!(lines[0].block_id, BlockId(1));
    }

    #[test]
    fn trailing_newline_adds_a_line() {
        let lines = table("a\r\nb\n");
        let spans: Vec<_> = lines.iter().map(|l| (l.span.start, l.span.end)).collect();
        assert_eq!(spans, vec![(0, 1), (3, 4), (5, 5)]);
    }

    #[test]
    fn line_index_lookup() {
        let lines = table("ab\ncd\n\nef");
        assert_eq!(line_index_at(&lines, 0), 0);
        assert_eq!(line_index_at(&lines, 2), 0);
        assert_eq!(line_index_at(&lines, 3), 1);
        assert_eq!(line_index_at(&lines, 6), 2);
        assert_eq!(line_index_at(&lines, 9), 3);
    }
}
