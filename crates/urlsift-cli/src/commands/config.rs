//! Config command - configuration management

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;
use urlsift_core::Config;

/// Config file name searched in the working and user config directories
pub const CONFIG_FILE_NAME: &str = "urlsift.toml";

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Generate a configuration file with default values
    Generate {
        /// Output file path
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show config file locations
    Paths,
}

/// Execute config command
pub fn execute(args: ConfigArgs, config: &Config, loaded_from: Option<PathBuf>) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, loaded_from),
        ConfigAction::Generate { output, force } => generate_config(output, force),
        ConfigAction::Paths => show_paths(loaded_from),
    }
}

fn show_config(config: &Config, loaded_from: Option<PathBuf>) -> Result<()> {
    let toml_str = config.to_toml().context("Failed to serialize config")?;

    match loaded_from {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# Built-in defaults"),
    }
    println!("{}", toml_str);
    Ok(())
}

fn generate_config(output: PathBuf, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            output.display()
        );
    }

    let toml_str = Config::default()
        .to_toml()
        .context("Failed to serialize config")?;

    let content = format!(
        "# urlsift configuration\n\
         # policy: suffix | exact, reducer: naive | public-suffix\n\n\
         {}",
        toml_str
    );

    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write config to {}", output.display()))?;

    info!("Generated config file: {}", output.display());
    println!("Configuration file generated: {}", output.display());

    Ok(())
}

fn show_paths(loaded_from: Option<PathBuf>) -> Result<()> {
    println!("Configuration file search paths:");
    println!();

    for (index, path) in search_paths().iter().enumerate() {
        println!("  {}. {}", index + 1, path.display());
    }

    println!();
    match loaded_from {
        Some(path) => println!("Active: {}", path.display()),
        None => println!("Active: none (built-in defaults)"),
    }

    Ok(())
}

/// Candidate config files, in search order
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];

    if let Some(dirs) = directories::ProjectDirs::from("", "", "urlsift") {
        paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }

    paths
}

/// First existing config file on the search path
pub fn find_config_file() -> Option<PathBuf> {
    search_paths().into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_paths_start_with_working_dir() {
        let paths = search_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_generate_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urlsift.toml");

        generate_config(path.clone(), false).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, Config::default());

        assert!(generate_config(path.clone(), false).is_err());
        assert!(generate_config(path, true).is_ok());
    }
}
