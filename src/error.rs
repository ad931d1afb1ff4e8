//! Error types for fix-includes
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fix-includes operations
pub type FixResult<T> = Result<T, FixError>;

/// Main error type for fix-includes operations
#[derive(Error, Debug)]
pub enum FixError {
    /// The target source file does not exist
    #[error("target file not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// The target exists but cannot be read or replaced
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// The target is not valid UTF-8 text
    #[error("target file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    /// Any other I/O failure while reading or writing the target
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
