//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a parsed tree as stable, indented text for `insta`
//!   snapshot testing and for the CLI's tree view
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   child spans contained in parents, content inside spans, pre-order ids)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by snapshot tests of markdown fixtures rather than
//! a separate formal grammar. Snapshots assert node types, ids, spans, and a
//! preview of each node's content.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
