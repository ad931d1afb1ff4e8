//! Presentation Layer
//!
//! - `cli` - clap definitions
//! - `output` - human and JSON rendering of a rewrite

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{render, report_diagnostics, report_json, SUCCESS_MESSAGE};
