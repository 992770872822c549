//! # urlsift Core
//!
//! Filters URL lists against a blocklist of domains.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Domain normalization** - URL or bare host to registrable domain
//! - **List loading** - UTF-8 / UTF-16 / Windows-1252 decoding into clean lines
//! - **Blocklist matching** - suffix or exact comparison of normalized domains
//! - **Filter engine** - order-preserving kept/removed partition with counters
//! - **Configuration** - TOML-backed settings for the CLI
//!
//! ## Example
//!
//! ```rust
//! use urlsift_core::{Engine, MatchPolicy, Normalizer};
//!
//! let engine = Engine::new(Normalizer::default(), MatchPolicy::Suffix);
//! let outcome = engine.run_bytes(
//!     b"https://mail.example.com/inbox\nhttps://example.org/\n",
//!     b"example.com\n",
//! )?;
//!
//! assert_eq!(outcome.kept, vec!["https://example.org/"]);
//! assert_eq!(outcome.removed, vec!["https://mail.example.com/inbox"]);
//! # Ok::<(), urlsift_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod filter;
pub mod loader;

// Re-exports for convenience
pub use config::Config;
pub use domain::{normalize, DomainReducer, DomainToken, Normalizer, ReducerKind};
pub use engine::{filter, Engine, FilterOutcome, FilterSummary};
pub use error::{Error, Result};
pub use filter::{is_blocked, Blocklist, MatchPolicy};
pub use loader::{decode_text, load_lines, Decoded, TextEncoding};
