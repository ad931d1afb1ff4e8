//! Domain Value Objects

mod hash;

pub use hash::ContentHash;
