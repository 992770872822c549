//! Check command - test one URL against a blocklist

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use urlsift_core::{load_lines, Config, Engine, MatchPolicy, Normalizer, ReducerKind};

use super::read_input;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URL or domain to check
    pub url: String,

    /// Blocklist file
    #[arg(short, long, value_name = "FILE")]
    pub blocklist: PathBuf,

    /// Match policy: suffix or exact (default: from config)
    #[arg(short, long, value_name = "POLICY")]
    pub policy: Option<MatchPolicy>,

    /// Domain reducer: naive or public-suffix (default: from config)
    #[arg(short, long, value_name = "REDUCER")]
    pub reducer: Option<ReducerKind>,
}

/// Execute check command
pub fn execute(args: CheckArgs, config: &Config) -> Result<()> {
    let policy = args.policy.unwrap_or(config.filter.policy);
    let reducer = args.reducer.unwrap_or(config.filter.reducer);
    let engine = Engine::new(Normalizer::new(reducer), policy);

    let bytes = read_input(&args.blocklist, "blocklist")?;
    let lines = load_lines(&bytes)
        .with_context(|| format!("Failed to decode {}", args.blocklist.display()))?;
    let blocklist = engine.blocklist(&lines);

    let token = engine.normalizer().normalize(&args.url);
    let entry = token
        .as_ref()
        .and_then(|token| blocklist.match_token(token, policy));

    println!("{}", "─".repeat(50).bright_black());
    println!("URL: {}", args.url.cyan());
    println!(
        "Domain: {}",
        match token {
            Some(ref token) => token.as_str().normal(),
            None => "(none)".dimmed(),
        }
    );
    println!("Policy: {} ({})", policy, engine.normalizer().reducer_name());
    println!("Blocklist domains: {}", blocklist.len());
    println!(
        "Result: {}",
        if entry.is_some() {
            "Blocked".red()
        } else {
            "Kept".green()
        }
    );
    if let Some(entry) = entry {
        println!("Matched entry: {}", entry.as_str().yellow());
    }
    println!("{}", "─".repeat(50).bright_black());

    Ok(())
}
