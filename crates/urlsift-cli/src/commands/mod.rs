//! CLI commands

pub mod check;
pub mod completions;
pub mod config;
pub mod normalize;
pub mod run;

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter a URL list against a blocklist (main command)
    Run(run::RunArgs),

    /// Check a single URL against a blocklist
    Check(check::CheckArgs),

    /// Print the normalized domain of each input
    Normalize(normalize::NormalizeArgs),

    /// Configuration management
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read an input list file
pub(crate) fn read_input(path: &Path, name: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {} from {}", name, path.display()))
}
