//! Domain Ports (Interfaces)
//!
//! Infrastructure layer provides concrete implementations.

pub mod file_system;

pub use file_system::{FileSystem, FsError, FsResult};
