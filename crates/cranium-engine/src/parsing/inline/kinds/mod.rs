//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `*` / `_` runs of length 1–3
//! - **`Link`**: `[`, `]`, `(`, `)` and the image `!`
//! - **`Escape`**: `\` before a delimiter byte
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `*` or `[`.

pub mod emphasis;
pub mod escape;
pub mod link;

pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::Link;
