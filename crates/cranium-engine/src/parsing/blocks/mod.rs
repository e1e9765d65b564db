//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing over a stack of open containers.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blockquote depth, blank status) and can report its first
//!    token after any number of `>` prefixes
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` keeps a `ContainerPath` of open
//!    blocks, closes the ones a line does not continue, and opens new ones from the
//!    line's first token
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockType`, `BlockId`)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence, Heading, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerPath`, the stack of open blocks and its continuation rules
//! - **`open`**: `try_open` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - All spans index the parsed text; line terminators are never inside a content span

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier, Token};
pub use types::{Block, BlockId, BlockType};
