use super::span::Span;

/// A reference to a single line of the text with its byte spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line without its terminator (`\n`, or `\r\n`).
    pub span: Span,
    /// The line bytes, terminator stripped.
    pub text: &'a [u8],
}

/// Returns an iterator over `\n`-separated lines with their byte spans.
///
/// Always yields `1 + count('\n')` lines: a trailing newline produces a final
/// empty line, and empty input produces a single empty line. A `\r` right
/// before the `\n` is treated as part of the terminator.
pub fn lines_with_spans(text: &[u8]) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split(|&b| b == b'\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let trimmed = raw.strip_suffix(b"\r").unwrap_or(raw);
        LineRef {
            span: Span {
                start,
                end: start + trimmed.len(),
            },
            text: trimmed,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(text: &str) -> Vec<(usize, usize)> {
        lines_with_spans(text.as_bytes())
            .map(|l| (l.span.start, l.span.end))
            .collect()
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(spans(""), vec![(0, 0)]);
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        assert_eq!(spans("ab\ncd\n"), vec![(0, 2), (3, 5), (6, 6)]);
    }

    #[test]
    fn crlf_terminator_is_excluded() {
        let lines: Vec<_> = lines_with_spans(b"ab\r\ncd").collect();
        assert_eq!(lines[0].text, b"ab");
        assert_eq!(lines[0].span, Span { start: 0, end: 2 });
        assert_eq!(lines[1].span, Span { start: 4, end: 6 });
    }

    #[test]
    fn blank_lines_are_preserved() {
        assert_eq!(spans("a\n\nb"), vec![(0, 1), (2, 2), (3, 4)]);
    }
}
