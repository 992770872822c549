//! Registrable-domain reduction strategies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::PublicSuffixReducer;
use crate::error::Error;

/// Trait for host → registrable-domain reduction
///
/// Input is a lowercase host with scheme, `www.`, port and path already
/// stripped. Implementations must be pure.
pub trait DomainReducer: Send + Sync {
    /// Get the reducer name for logging/configuration
    fn name(&self) -> &'static str;

    /// Reduce a host to its registrable domain
    fn reduce(&self, host: &str) -> String;
}

/// Keeps the last two dot-separated labels
///
/// Multi-label public suffixes are not special-cased:
/// `shop.example.co.uk` becomes `co.uk`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveReducer;

impl NaiveReducer {
    /// Last two labels of `host`, borrowed
    pub fn last_two_labels(host: &str) -> &str {
        match host.rmatch_indices('.').nth(1) {
            Some((pos, _)) => &host[pos + 1..],
            None => host,
        }
    }
}

impl DomainReducer for NaiveReducer {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn reduce(&self, host: &str) -> String {
        Self::last_two_labels(host).to_string()
    }
}

/// Built-in reducer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReducerKind {
    /// Last two labels
    #[default]
    Naive,
    /// Public Suffix List lookup, falling back to the last two labels
    PublicSuffix,
}

impl ReducerKind {
    /// Instantiate the reducer
    pub fn build(self) -> Arc<dyn DomainReducer> {
        match self {
            Self::Naive => Arc::new(NaiveReducer),
            Self::PublicSuffix => Arc::new(PublicSuffixReducer),
        }
    }

    /// Configuration name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::PublicSuffix => "public-suffix",
        }
    }
}

impl fmt::Display for ReducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReducerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" | "last-two" => Ok(Self::Naive),
            "public-suffix" | "psl" => Ok(Self::PublicSuffix),
            other => Err(Error::config_value(
                "reducer",
                format!("Unknown reducer: {other}. Expected naive or public-suffix"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_two_labels() {
        assert_eq!(NaiveReducer::last_two_labels("example.com"), "example.com");
        assert_eq!(NaiveReducer::last_two_labels("a.b.example.com"), "example.com");
        assert_eq!(NaiveReducer::last_two_labels("localhost"), "localhost");
        assert_eq!(NaiveReducer::last_two_labels("shop.example.co.uk"), "co.uk");
    }

    #[test]
    fn test_reducer_kind_parse() {
        assert_eq!("naive".parse::<ReducerKind>().unwrap(), ReducerKind::Naive);
        assert_eq!("PSL".parse::<ReducerKind>().unwrap(), ReducerKind::PublicSuffix);
        assert_eq!(
            "public-suffix".parse::<ReducerKind>().unwrap(),
            ReducerKind::PublicSuffix
        );
        assert!("fancy".parse::<ReducerKind>().is_err());
    }

    #[test]
    fn test_build_names() {
        assert_eq!(ReducerKind::Naive.build().name(), "naive");
        assert_eq!(ReducerKind::PublicSuffix.build().name(), "public-suffix");
    }
}
