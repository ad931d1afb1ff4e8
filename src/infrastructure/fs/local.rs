//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if !self.exists(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        overwrite_in_place(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Truncate `path` and write `content` into the same file.
///
/// Follows symlinks and keeps the inode, so links, ownership and mode stay
/// as they were. Never creates the file; an unwritable target is an error.
pub fn overwrite_in_place(path: &Path, content: &[u8]) -> FsResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FsError::from_io(path, e))?;
    file.write_all(content)
        .map_err(|e| FsError::from_io(path, e))?;
    file.sync_all().map_err(|e| FsError::from_io(path, e))
}
