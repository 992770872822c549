//! urlsift CLI
//!
//! Command-line interface for filtering URL lists against a domain blocklist.

mod args;
mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};
use urlsift_core::Config;

use args::Args;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Configuration feeds logging, so it loads first
    let (config, config_path) = load_config(&args)?;

    // Initialize logging
    logging::init(&args, &config.logging)?;

    if let Some(ref path) = config_path {
        debug!("Loaded configuration from {}", path.display());
    }

    let result = run(args, &config, config_path);

    if let Err(ref e) = result {
        error!("Fatal error: {:#}", e);
    }

    result
}

fn run(args: Args, config: &Config, config_path: Option<PathBuf>) -> Result<()> {
    match args.command {
        commands::Command::Run(run_args) => commands::run::execute(run_args, config),
        commands::Command::Check(check_args) => commands::check::execute(check_args, config),
        commands::Command::Normalize(normalize_args) => {
            commands::normalize::execute(normalize_args, config)
        }
        commands::Command::Config(config_args) => {
            commands::config::execute(config_args, config, config_path)
        }
        commands::Command::Completions(comp_args) => commands::completions::execute(comp_args),
    }
}

/// Load the explicit config file, or the first one found on the search path
fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>)> {
    let path = match args.config {
        Some(ref path) => Some(path.clone()),
        None => commands::config::find_config_file(),
    };

    let Some(path) = path else {
        return Ok((Config::default(), None));
    };

    let config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    Ok((config, Some(path)))
}
