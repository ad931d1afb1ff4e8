//! Common test utilities for fix-includes CLI and property tests.
//!
//! - `TestEnv`: isolated project directory plus a helper to run the binary
//! - Fixtures: firmware-shaped `main.cpp` samples

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
