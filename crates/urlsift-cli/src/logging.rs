//! Logging initialization
//!
//! Logs go to stderr so that command output on stdout stays pipeable.

use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use urlsift_core::config::LoggingConfig;

use crate::args::{Args, LogFormat};

/// Initialize logging from CLI arguments, falling back to the config file
pub fn init(args: &Args, config: &LoggingConfig) -> Result<()> {
    let level = level(args, config)?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let format = if args.log_format == LogFormat::Text && config.json_format {
        LogFormat::Json
    } else {
        args.log_format
    };

    let log_file = args.log_file.as_deref().or(config.file.as_deref());
    let file = match log_file {
        Some(path) => Some(Arc::new(
            File::create(path).with_context(|| format!("Failed to create log file: {}", path))?,
        )),
        None => None,
    };

    match format {
        LogFormat::Text => {
            let file_layer = file.map(|file| fmt::layer().with_ansi(false).with_writer(file));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(args.verbose >= 2)
                        .with_thread_ids(args.verbose >= 3)
                        .with_file(args.verbose >= 3)
                        .with_line_number(args.verbose >= 3),
                )
                .with(file_layer)
                .init();
        }
        LogFormat::Json => {
            let file_layer = file.map(|file| fmt::layer().json().with_writer(file));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(file_layer)
                .init();
        }
        LogFormat::Compact => {
            let file_layer = file.map(|file| {
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_writer(file)
            });
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .with(file_layer)
                .init();
        }
    }

    Ok(())
}

/// Resolve the default log level
///
/// `-q` wins, then the `-v` count, then `[logging] level` from the config.
fn level(args: &Args, config: &LoggingConfig) -> Result<Level> {
    if args.quiet {
        return Ok(Level::ERROR);
    }

    match args.verbose {
        0 => config
            .level
            .parse::<Level>()
            .with_context(|| format!("Invalid log level in config: {}", config.level)),
        1 => Ok(Level::DEBUG),
        _ => Ok(Level::TRACE),
    }
}
