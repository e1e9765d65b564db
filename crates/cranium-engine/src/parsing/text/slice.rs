use super::span::Span;

/// Extracts the text for a span as an owned String, replacing invalid UTF-8.
///
/// Spans are clamped to `text`, so a span from a stale generation never panics here.
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(text: &[u8], sp: Span) -> String {
    let end = sp.end.min(text.len());
    let start = sp.start.min(end);
    String::from_utf8_lossy(&text[start..end]).into_owned()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Truncation backs off to a character boundary. Used for human-readable
/// snapshot output.
pub fn preview(text: &[u8], sp: Span, max: usize) -> String {
    let mut s = slice_to_string(text, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
