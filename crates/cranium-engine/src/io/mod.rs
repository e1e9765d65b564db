//! Whole-file reads and writes. Documents are opaque bytes on disk.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a whole file as raw bytes
pub fn read_file(path: &Path) -> Result<Vec<u8>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(IoError::Io)
}

/// Write bytes to a file, truncating whatever was there.
///
/// No temporary file, no rename, no backup.
pub fn write_file(path: &Path, content: &[u8]) -> Result<(), IoError> {
    fs::write(path, content).map_err(IoError::Io)
}
