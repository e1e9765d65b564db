//! # Inline Parsing
//!
//! Cursor-based inline parsing over the content of paragraph and heading
//! leaves.
//!
//! ## Architecture
//!
//! Inline parsing runs after block parsing and never crosses a line: each
//! leaf's content is one line with its terminator excluded. The result is a
//! flat list of child nodes (`RawText`, `Emphasis`, `Strong`,
//! `StrongEmphasis`, `Link`, `Image`); the inner text of a span is not parsed
//! again.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, Link, Escape)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Degradation
//!
//! Unmatched delimiters are literal text. `**a*` is a single `RawText`.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
