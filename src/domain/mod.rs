//! Domain Layer
//!
//! Pure logic without I/O dependencies.
//!
//! - `header` - the header block and the line splice
//! - `value_objects/` - immutable value types (ContentHash)
//! - `ports/` - interface definitions for infrastructure

pub mod header;
pub mod ports;
pub mod value_objects;
