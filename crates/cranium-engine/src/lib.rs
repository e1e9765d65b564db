pub mod buffer;
pub mod editing;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use buffer::{BufferError, GapBuffer};
pub use editing::{
    Cursor, CursorMetrics, CursorStep, FontSizeClass, Line, Patch, Session, SessionError,
    SessionId, SessionOptions, SessionState,
};
pub use io::IoError;
pub use parsing::{
    blocks::{Block, BlockId, BlockType},
    parse_blocks, parse_document,
    text::Span,
};
