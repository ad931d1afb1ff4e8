//! fix-includes - restores the include order of the firmware entry point
//!
//! Replaces the first seven lines of `src/main.cpp` with a fixed, correctly
//! ordered block of `#include` directives and leaves the rest of the file
//! untouched.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{target_path, HeaderRewriter, RewriteReport, TARGET_FILE};
pub use config::{Config, Verbosity};
pub use domain::header::{replace_header, HEADER_BLOCK, HEADER_LEN};
pub use error::{FixError, FixResult};
pub use infrastructure::LocalFs;
