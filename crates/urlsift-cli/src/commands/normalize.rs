//! Normalize command - print the domain token for each input

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use urlsift_core::{load_lines, Config, Normalizer, ReducerKind};

use super::read_input;

/// Normalize command arguments
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// URLs or domains to normalize
    pub inputs: Vec<String>,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Domain reducer: naive or public-suffix (default: from config)
    #[arg(short, long, value_name = "REDUCER")]
    pub reducer: Option<ReducerKind>,
}

/// Execute normalize command
pub fn execute(args: NormalizeArgs, config: &Config) -> Result<()> {
    let normalizer = Normalizer::new(args.reducer.unwrap_or(config.filter.reducer));

    let mut inputs = args.inputs;
    if let Some(ref path) = args.file {
        let bytes = read_input(path, "input list")?;
        let lines =
            load_lines(&bytes).with_context(|| format!("Failed to decode {}", path.display()))?;
        inputs.extend(lines);
    }

    if inputs.is_empty() {
        bail!("No inputs given; pass URLs as arguments or use --file");
    }

    for input in &inputs {
        println!("{}", render(&normalizer, input));
    }

    Ok(())
}

/// Token for one input, `-` when absent
fn render(normalizer: &Normalizer, input: &str) -> String {
    normalizer
        .normalize(input)
        .map_or_else(|| "-".to_string(), |token| token.into_string())
}
