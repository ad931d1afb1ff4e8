//! fix-includes CLI
//!
//! Usage: fix-includes [-C <DIR>] [--json] [-v]

use anyhow::{Context, Result};
use clap::Parser;

use fix_includes::presentation::{render, Cli};
use fix_includes::{target_path, Config, HeaderRewriter, LocalFs, Verbosity};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::default()
        .with_env_overrides()
        .with_cli(cli.project_root, cli.verbose);

    let target = target_path(&config.project_root);
    if config.verbosity >= Verbosity::Debug {
        eprintln!("Target: {}", target.display());
    }

    let rewriter = HeaderRewriter::new(LocalFs::new());
    let report = rewriter
        .rewrite(&target)
        .with_context(|| format!("failed to fix includes in {}", target.display()))?;

    render(&report, config.verbosity, cli.json)
}
