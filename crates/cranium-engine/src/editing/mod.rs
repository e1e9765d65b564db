/*!
 * # Editing Core Module
 *
 * A [`Session`] owns one open document and keeps three things consistent
 * across every edit: the text, the parsed block tree, and the cursor.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the gap buffer
 * - The document lives in one [`crate::buffer::GapBuffer`]
 * - Runs of edits at one place (typing) move no bytes beyond the edit itself
 * - **Lossless round-trip**: saving writes the buffer bytes verbatim
 *
 * ### 2. Full re-parse per edit
 * - Every mutation builds a new [`Generation`]: a snapshot of the text, the block
 *   tree parsed from it, and the line table
 * - The new generation replaces the old one in a single assignment
 * - Block ids are pre-order numbers and are not stable across generations
 *
 * ### 3. Cursor resolution
 * - The cursor is a byte offset, always clamped to `[0, len]`
 * - After each edit it is resolved against the new tree (active block) and
 *   line table (line, column)
 * - Horizontal steps are code points by default ([`CursorStep`])
 *
 * ## Module Structure
 *
 * - **`session`**: `Session`, its state machine and error type
 * - **`generation`**: `Generation`, one parse cycle's owned output
 * - **`lines`**: line table construction and lookup
 * - **`cursor`**: `Cursor`, `CursorStep` and vertical movement
 * - **`patch`**: Edit result metadata including the changed range and new cursor
 *
 * ## Usage Pattern
 *
 * ```rust
 * use cranium_engine::editing::*;
 *
 * let mut session = Session::from_bytes(b"first\nsecond", SessionOptions::default()).unwrap();
 * session.move_cursor_down().unwrap();
 * session.insert_text("the ").unwrap();
 *
 * assert_eq!(session.text(), b"first\nthe second");
 * assert_eq!(session.cursor().metrics, CursorMetrics { line: 1, column: 4 });
 * ```
 */

pub mod cursor;
pub mod generation;
pub mod lines;
pub mod patch;
pub mod session;

pub use cursor::{Cursor, CursorMetrics, CursorStep};
pub use generation::Generation;
pub use lines::{FontSizeClass, Line};
pub use patch::Patch;
pub use session::{Session, SessionError, SessionId, SessionOptions, SessionState};
