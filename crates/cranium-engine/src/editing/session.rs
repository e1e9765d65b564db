use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::{info, trace, warn};
use uuid::Uuid;

use crate::buffer::{BufferError, GapBuffer};
use crate::io::{self, IoError};
use crate::parsing::blocks::{Block, BlockId};

use super::{
    Patch,
    cursor::{Cursor, CursorStep, vertical_target},
    generation::Generation,
    lines::Line,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] IoError),
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
    #[error("Session has no file path")]
    NoPath,
    #[error("Session is closed")]
    Closed,
    #[error("Session is invalid: the document could not be re-parsed")]
    Invalid,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Tree, lines and cursor all match the buffer.
    Idle,
    /// The buffer was edited but no generation could be built for it.
    /// Edits and cursor moves are refused; saving still writes the buffer.
    Invalid,
    Closed,
}

/// Per-session behaviour knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub cursor_step: CursorStep,
}

/// Random id used to correlate a session's log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One open document: the gap buffer, the current parse generation, and the cursor.
///
/// Every mutating call runs the whole cycle before returning: edit the buffer,
/// re-parse into a new [`Generation`], rebuild the line table, and re-resolve
/// the cursor. There is no background work.
///
/// ```rust
/// # use cranium_engine::editing::{Session, SessionOptions};
/// let mut session = Session::from_bytes(b"## Title\n\nbody text", SessionOptions::default()).unwrap();
/// session.set_cursor_offset(8).unwrap();
/// let patch = session.insert_text("!").unwrap();
/// assert_eq!(patch.changed, 8..9);
/// assert_eq!(session.text(), b"## Title!\n\nbody text");
/// ```
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    path: Option<PathBuf>,
    options: SessionOptions,
    buffer: GapBuffer,
    generation: Generation,
    cursor: Cursor,
    state: SessionState,
}

impl Session {
    /// Reads a whole file and parses it.
    pub fn open(path: impl AsRef<Path>, options: SessionOptions) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let bytes = io::read_file(path)?;
        let mut session = Self::from_bytes(&bytes, options)?;
        session.path = Some(path.to_path_buf());
        info!(
            "session {}: opened {} ({} bytes)",
            session.id,
            path.display(),
            bytes.len()
        );
        Ok(session)
    }

    /// A session with no backing file; [`Session::save`] fails until
    /// [`Session::save_as`] gives it one.
    pub fn from_bytes(bytes: &[u8], options: SessionOptions) -> Result<Self, SessionError> {
        let buffer = GapBuffer::from_bytes(bytes)?;
        let generation = Generation::build(0, &buffer)?;
        let cursor = Cursor::resolve(0, &generation.root, &generation.lines);
        Ok(Self {
            id: SessionId::new(),
            path: None,
            options,
            buffer,
            generation,
            cursor,
            state: SessionState::Idle,
        })
    }

    // Mutations

    /// Inserts `s` at the cursor and moves the cursor past it.
    pub fn insert_text(&mut self, s: &str) -> Result<Patch, SessionError> {
        self.ensure_ready()?;
        let at = self.cursor.offset;
        if s.is_empty() {
            return Ok(self.unchanged());
        }
        self.buffer.insert(at, s.as_bytes())?;
        let end = at + s.len();
        self.commit(at..end, end)
    }

    /// Deletes one unit before the cursor. A no-op at offset 0.
    pub fn delete_backward(&mut self) -> Result<Patch, SessionError> {
        self.ensure_ready()?;
        let end = self.cursor.offset;
        if end == 0 {
            return Ok(self.unchanged());
        }
        let start = self.options.cursor_step.prev(&self.buffer, end);
        self.buffer.delete(start, end)?;
        self.commit(start..start, start)
    }

    /// Deletes one unit after the cursor. A no-op at the end of the text.
    pub fn delete_forward(&mut self) -> Result<Patch, SessionError> {
        self.ensure_ready()?;
        let start = self.cursor.offset;
        if start >= self.buffer.len() {
            return Ok(self.unchanged());
        }
        let end = self.options.cursor_step.next(&self.buffer, start);
        self.buffer.delete(start, end)?;
        self.commit(start..start, start)
    }

    /// Deletes `[start, end)`. Both ends are clamped to the text and ordered.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<Patch, SessionError> {
        self.ensure_ready()?;
        let len = self.buffer.len();
        let (a, b) = (start.min(len), end.min(len));
        let (start, end) = (a.min(b), a.max(b));
        if start == end {
            return Ok(self.unchanged());
        }
        self.buffer.delete(start, end)?;

        let c = self.cursor.offset;
        let cursor = if c >= end {
            c - (end - start)
        } else if c > start {
            start
        } else {
            c
        };
        self.commit(start..start, cursor)
    }

    // Cursor movement

    pub fn move_cursor_left(&mut self) -> Result<usize, SessionError> {
        self.ensure_ready()?;
        let to = self.options.cursor_step.prev(&self.buffer, self.cursor.offset);
        Ok(self.place_cursor(to))
    }

    pub fn move_cursor_right(&mut self) -> Result<usize, SessionError> {
        self.ensure_ready()?;
        let to = self.options.cursor_step.next(&self.buffer, self.cursor.offset);
        Ok(self.place_cursor(to))
    }

    /// Moves to the same byte column on the previous line, clamped to its end.
    /// On the first line the cursor stays put.
    pub fn move_cursor_up(&mut self) -> Result<usize, SessionError> {
        self.move_vertical(true)
    }

    /// Moves to the same byte column on the next line, clamped to its end.
    /// On the last line the cursor stays put.
    pub fn move_cursor_down(&mut self) -> Result<usize, SessionError> {
        self.move_vertical(false)
    }

    /// Clamps `offset` to the text and moves the cursor there.
    pub fn set_cursor_offset(&mut self, offset: usize) -> Result<usize, SessionError> {
        self.ensure_ready()?;
        let to = self.options.cursor_step.snap(&self.buffer, offset);
        Ok(self.place_cursor(to))
    }

    // Queries

    /// Deepest cursor-eligible block holding caret `offset` (clamped to the text).
    pub fn locate_block_at(&self, offset: usize) -> BlockId {
        let root = &self.generation.root;
        let offset = offset.min(root.span.end);
        root.locate(offset).map_or(root.id, |b| b.id)
    }

    // Persistence

    /// Writes the buffer to the session's file, truncating it.
    pub fn save(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        let path = self.path.clone().ok_or(SessionError::NoPath)?;
        self.write_to(&path)
    }

    /// Writes the buffer to `path` and makes it the session's file.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        self.ensure_open()?;
        let path = path.as_ref();
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Releases the buffer and the current generation. Idempotent.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.buffer = GapBuffer::new();
        self.generation = Generation::empty(self.generation.id);
        self.cursor = Cursor::resolve(0, &self.generation.root, &self.generation.lines);
        self.state = SessionState::Closed;
        info!("session {}: closed", self.id);
    }

    // Accessors

    pub fn root(&self) -> &Block {
        &self.generation.root
    }

    pub fn lines(&self) -> &[Line] {
        &self.generation.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn active_block_id(&self) -> BlockId {
        self.cursor.active_block
    }

    /// Bytes of the current generation; what the tree and line table index.
    pub fn text(&self) -> &[u8] {
        &self.generation.text
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    // Internals

    fn ensure_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Closed => Err(SessionError::Closed),
            _ => Ok(()),
        }
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Idle => Ok(()),
            SessionState::Invalid => Err(SessionError::Invalid),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }

    fn unchanged(&self) -> Patch {
        let at = self.cursor.offset;
        Patch {
            changed: at..at,
            cursor: at,
            generation: self.generation.id,
        }
    }

    /// Re-parses after a buffer edit and moves the cursor to `cursor`.
    ///
    /// If no generation can be built the session becomes invalid; the cursor
    /// offset is still clamped to the edited buffer.
    fn commit(&mut self, changed: Range<usize>, cursor: usize) -> Result<Patch, SessionError> {
        let cursor = cursor.min(self.buffer.len());
        match Generation::build(self.generation.id + 1, &self.buffer) {
            Ok(generation) => {
                self.generation = generation;
            }
            Err(e) => {
                warn!("session {}: re-parse failed, session invalid: {e}", self.id);
                self.cursor.offset = cursor;
                self.state = SessionState::Invalid;
                return Err(e.into());
            }
        }
        let cursor = self.place_cursor(cursor);
        Ok(Patch {
            changed,
            cursor,
            generation: self.generation.id,
        })
    }

    fn place_cursor(&mut self, offset: usize) -> usize {
        self.cursor = Cursor::resolve(offset, &self.generation.root, &self.generation.lines);
        trace!(
            "session {}: cursor {} (line {}, column {}, block {})",
            self.id,
            self.cursor.offset,
            self.cursor.metrics.line,
            self.cursor.metrics.column,
            self.cursor.active_block
        );
        self.cursor.offset
    }

    fn move_vertical(&mut self, up: bool) -> Result<usize, SessionError> {
        self.ensure_ready()?;
        let from = self.cursor.offset;
        match vertical_target(&self.generation.lines, from, up) {
            Some(to) => {
                let to = self.options.cursor_step.snap(&self.buffer, to);
                Ok(self.place_cursor(to))
            }
            None => Ok(from),
        }
    }

    fn write_to(&self, path: &Path) -> Result<(), SessionError> {
        let bytes = self.buffer.try_snapshot()?;
        io::write_file(path, &bytes)?;
        info!(
            "session {}: saved {} bytes to {}",
            self.id,
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}
