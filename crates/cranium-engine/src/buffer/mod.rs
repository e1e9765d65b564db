//! # Text Buffer
//!
//! The mutable byte store behind a document session. It is a [`GapBuffer`]:
//! edits clustered around one position (typing, backspacing) are cheap, and
//! the session takes a contiguous snapshot of it once per parse generation.
//!
//! The buffer outlives every parse generation; parsed trees never borrow from
//! it directly.

pub mod gap;

pub use gap::{BufferError, GapBuffer};
