//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the rewrite use case run against disk or an in-memory mock.

use std::path::{Path, PathBuf};

use crate::error::FixError;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Content is not valid UTF-8
    InvalidUtf8(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Classify an io::Error raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::InvalidData => FsError::InvalidUtf8(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::InvalidUtf8(path) => write!(f, "Invalid UTF-8: {}", path.display()),
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for FixError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => FixError::TargetNotFound { path },
            FsError::PermissionDenied(path) => FixError::PermissionDenied { path },
            FsError::InvalidUtf8(path) => FixError::InvalidUtf8 { path },
            FsError::Io(path, source) => FixError::Io { path, source },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O, overwriting in place
/// - `MockFileSystem` (tests) - in-memory
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace the content of an existing file
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}
