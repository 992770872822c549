//! Run command - filter a URL list against a blocklist

use anyhow::{Context, Result};
use clap::Args;
use colored::{ColoredString, Colorize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use urlsift_core::config::FilterConfig;
use urlsift_core::{Config, Engine, FilterOutcome, FilterSummary, MatchPolicy, ReducerKind};

use super::read_input;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunArgs {
    /// URL list file
    #[arg(short, long, value_name = "FILE")]
    pub urls: PathBuf,

    /// Blocklist file
    #[arg(short, long, value_name = "FILE")]
    pub blocklist: PathBuf,

    /// Match policy: suffix or exact (default: from config)
    #[arg(short, long, value_name = "POLICY")]
    pub policy: Option<MatchPolicy>,

    /// Domain reducer: naive or public-suffix (default: from config)
    #[arg(short, long, value_name = "REDUCER")]
    pub reducer: Option<ReducerKind>,

    /// Output file for kept URLs
    #[arg(long, value_name = "FILE")]
    pub kept_out: Option<PathBuf>,

    /// Output file for removed URLs
    #[arg(long, value_name = "FILE")]
    pub removed_out: Option<PathBuf>,

    /// Number of URLs previewed per list
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Print results without writing output files
    #[arg(long)]
    pub no_write: bool,
}

impl RunArgs {
    /// Filter settings with CLI flags applied over the config
    pub fn filter_config(&self, config: &Config) -> FilterConfig {
        FilterConfig {
            policy: self.policy.unwrap_or(config.filter.policy),
            reducer: self.reducer.unwrap_or(config.filter.reducer),
        }
    }
}

/// Execute run command
pub fn execute(args: RunArgs, config: &Config) -> Result<()> {
    let settings = args.filter_config(config);
    let engine = Engine::from_config(&settings);
    debug!(
        "Filtering with policy={} reducer={}",
        settings.policy,
        engine.normalizer().reducer_name()
    );

    let url_bytes = read_input(&args.urls, "URL list")?;
    let blocklist_bytes = read_input(&args.blocklist, "blocklist")?;

    let outcome = engine
        .run_bytes(&url_bytes, &blocklist_bytes)
        .context("Filtering failed")?;

    let preview = args.preview.unwrap_or(config.output.preview_limit);
    print_report(&outcome, preview);

    if args.no_write {
        return Ok(());
    }

    let kept_path = args
        .kept_out
        .unwrap_or_else(|| PathBuf::from(&config.output.kept_file));
    let removed_path = args
        .removed_out
        .unwrap_or_else(|| PathBuf::from(&config.output.removed_file));

    write_list(&kept_path, &outcome.kept, &outcome.kept_text())?;
    write_list(&removed_path, &outcome.removed, &outcome.removed_text())?;

    Ok(())
}

/// Write a result list
///
/// An empty list writes nothing and removes a file left by an earlier run.
fn write_list(path: &Path, lines: &[String], text: &str) -> Result<()> {
    if lines.is_empty() {
        match std::fs::remove_file(path) {
            Ok(()) => debug!("Removed stale {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Nothing to write to {}", path.display());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove {}", path.display()));
            }
        }
        return Ok(());
    }

    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} URLs to {}", lines.len(), path.display());
    println!("{} Saved {}", "✓".green(), path.display().to_string().cyan());
    Ok(())
}

fn print_report(outcome: &FilterOutcome, preview: usize) {
    print_summary(&outcome.summary());

    if preview == 0 {
        return;
    }

    print_preview("Kept URLs (sample)".green(), &outcome.kept, preview);
    print_preview("Removed URLs (sample)".red(), &outcome.removed, preview);
    println!("{}", "═".repeat(50).bright_blue());
}

fn print_summary(summary: &FilterSummary) {
    println!("{}", "═".repeat(50).bright_blue());
    println!("{}", " URL Filter".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("Total URLs:               {}", summary.total.to_string().cyan());
    println!(
        "Unique blocklist domains: {}",
        summary.blocklist_domains.to_string().cyan()
    );
    println!("URLs kept:                {}", summary.kept.to_string().green());
    println!("URLs removed:             {}", summary.removed.to_string().red());
}

fn print_preview(title: ColoredString, lines: &[String], limit: usize) {
    println!("{}", "─".repeat(50).bright_black());
    println!("{}", title.bold());

    if lines.is_empty() {
        println!("{}", "  (empty)".dimmed());
        return;
    }

    for line in lines.iter().take(limit) {
        println!("  {}", line);
    }

    if lines.len() > limit {
        println!("{}", format!("  ... and {} more", lines.len() - limit).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(policy: Option<MatchPolicy>, reducer: Option<ReducerKind>) -> RunArgs {
        RunArgs {
            urls: PathBuf::from("urls.txt"),
            blocklist: PathBuf::from("block.txt"),
            policy,
            reducer,
            kept_out: None,
            removed_out: None,
            preview: None,
            no_write: true,
        }
    }

    #[test]
    fn test_filter_config_defaults_to_config() {
        let mut config = Config::default();
        config.filter.policy = MatchPolicy::Exact;

        let settings = run_args(None, None).filter_config(&config);
        assert_eq!(settings.policy, MatchPolicy::Exact);
        assert_eq!(settings.reducer, ReducerKind::Naive);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.filter.policy = MatchPolicy::Exact;

        let settings = run_args(Some(MatchPolicy::Suffix), Some(ReducerKind::PublicSuffix))
            .filter_config(&config);
        assert_eq!(settings.policy, MatchPolicy::Suffix);
        assert_eq!(settings.reducer, ReducerKind::PublicSuffix);
    }

    #[test]
    fn test_write_list_skips_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_list(&path, &[], "").unwrap();
        assert!(!path.exists());

        let lines = vec!["a.com".to_string(), "b.com".to_string()];
        write_list(&path, &lines, "a.com\nb.com").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a.com\nb.com");
    }

    #[test]
    fn test_write_list_removes_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("removed.txt");
        std::fs::write(&path, "old.com").unwrap();

        write_list(&path, &[], "").unwrap();
        assert!(!path.exists());
    }
}
