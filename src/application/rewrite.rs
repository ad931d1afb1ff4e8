//! Rewrite Use Case
//!
//! Orchestrates the header fix:
//! 1. Read the target through the FileSystem port
//! 2. Splice the header block over the first seven lines
//! 3. Write the result back to the same path
//! 4. Report what happened
//!
//! The read completes before the write starts. A missing target is an error
//! and is never created.

use std::path::{Path, PathBuf};

use crate::domain::header::{line_count, replace_header, HEADER_LEN};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ContentHash;
use crate::error::FixResult;

/// Path of the file this tool repairs, relative to the project root
pub const TARGET_FILE: &str = "src/main.cpp";

/// Resolve the target file inside `project_root`
pub fn target_path(project_root: &Path) -> PathBuf {
    project_root.join(TARGET_FILE)
}

/// Outcome of one rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    /// File that was rewritten
    pub path: PathBuf,
    /// Line count before the rewrite
    pub lines_in: usize,
    /// Leading lines that were dropped
    pub lines_replaced: usize,
    /// Body lines carried over unchanged
    pub lines_kept: usize,
    /// Hash of the content before the rewrite
    pub before: ContentHash,
    /// Hash of the content written back
    pub after: ContentHash,
}

impl RewriteReport {
    /// Whether the rewrite changed the file's content
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// Whether the input was shorter than the header block
    pub fn was_short(&self) -> bool {
        self.lines_in < HEADER_LEN
    }
}

/// Header Rewriter Use Case
pub struct HeaderRewriter<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> HeaderRewriter<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Rewrite `path` in place.
    pub fn rewrite(&self, path: &Path) -> FixResult<RewriteReport> {
        let original = self.fs.read(path)?;
        let updated = replace_header(&original);

        let lines_in = line_count(&original);
        let lines_replaced = lines_in.min(HEADER_LEN);

        self.fs.write(path, &updated)?;

        Ok(RewriteReport {
            path: path.to_path_buf(),
            lines_in,
            lines_replaced,
            lines_kept: lines_in - lines_replaced,
            before: ContentHash::from_content(&original),
            after: ContentHash::from_content(&updated),
        })
    }
}
