//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::commands::Command;

/// urlsift - remove URLs whose domain appears on a blocklist
///
/// Normalizes every URL and blocklist entry to its registrable domain and
/// splits the URL list into kept and removed lines.
#[derive(Parser, Debug)]
#[command(name = "urlsift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log file path
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<String>,

    /// Run in quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlsift_core::{MatchPolicy, ReducerKind};

    #[test]
    fn test_verbose() {
        let args = Args::parse_from(["urlsift", "-v", "normalize", "example.com"]);
        assert_eq!(args.verbose, 1);

        let args = Args::parse_from(["urlsift", "normalize", "-vvv", "example.com"]);
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["urlsift", "-q", "-v", "normalize"]).is_err());
    }

    #[test]
    fn test_log_format() {
        let args = Args::parse_from(["urlsift", "--log-format", "json", "config", "paths"]);
        assert_eq!(args.log_format, LogFormat::Json);

        let args = Args::parse_from(["urlsift", "config", "paths"]);
        assert_eq!(args.log_format, LogFormat::Text);
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "urlsift",
            "run",
            "--urls",
            "urls.txt",
            "--blocklist",
            "block.txt",
            "--policy",
            "exact",
            "--reducer",
            "psl",
            "--preview",
            "5",
            "--no-write",
        ]);

        match args.command {
            Command::Run(run) => {
                assert_eq!(run.urls, PathBuf::from("urls.txt"));
                assert_eq!(run.blocklist, PathBuf::from("block.txt"));
                assert_eq!(run.policy, Some(MatchPolicy::Exact));
                assert_eq!(run.reducer, Some(ReducerKind::PublicSuffix));
                assert_eq!(run.preview, Some(5));
                assert!(run.no_write);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_inputs() {
        assert!(Args::try_parse_from(["urlsift", "run", "--urls", "urls.txt"]).is_err());
    }

    #[test]
    fn test_invalid_policy() {
        let result = Args::try_parse_from([
            "urlsift",
            "check",
            "example.com",
            "--blocklist",
            "b.txt",
            "--policy",
            "fuzzy",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_required() {
        assert!(Args::try_parse_from(["urlsift"]).is_err());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
