//! Configuration for fix-includes
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FIX_INCLUDES_*)
//! 3. Built-in defaults (lowest priority)

use std::path::PathBuf;

/// Environment variable naming the project root
pub const ENV_PROJECT_ROOT: &str = "FIX_INCLUDES_PROJECT_ROOT";
/// Environment variable naming the verbosity level
pub const ENV_VERBOSITY: &str = "FIX_INCLUDES_VERBOSITY";

/// How much diagnostic output goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory `src/main.cpp` is resolved against
    pub project_root: PathBuf,
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            verbosity: Verbosity::default(),
        }
    }
}

impl Config {
    /// Apply FIX_INCLUDES_* overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply FIX_INCLUDES_* overrides from an arbitrary lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ENV_PROJECT_ROOT).filter(|s| !s.trim().is_empty()) {
            self.project_root = PathBuf::from(root);
        }
        if let Some(level) = lookup(ENV_VERBOSITY) {
            self.verbosity = Verbosity::parse(&level);
        }
        self
    }

    /// Apply CLI flags on top of everything else
    pub fn with_cli(mut self, project_root: Option<PathBuf>, verbose: u8) -> Self {
        if let Some(root) = project_root {
            self.project_root = root;
        }
        if verbose > 0 {
            self.verbosity = Verbosity::from_count(verbose);
        }
        self
    }
}
