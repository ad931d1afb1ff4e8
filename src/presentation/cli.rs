//! CLI Argument Parsing
//!
//! Every flag is optional; running with no arguments repairs `./src/main.cpp`.

use std::path::PathBuf;

use clap::Parser;

/// fix-includes - restore the include order at the top of src/main.cpp
#[derive(Parser, Debug)]
#[command(name = "fix-includes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory containing src/main.cpp
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
