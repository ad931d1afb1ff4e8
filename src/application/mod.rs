//! Application Layer
//!
//! Use cases that orchestrate the domain and the ports.
//!
//! - `HeaderRewriter` - reads the target, splices the header, writes it back

pub mod rewrite;

pub use rewrite::{target_path, HeaderRewriter, RewriteReport, TARGET_FILE};
