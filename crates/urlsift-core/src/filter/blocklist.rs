//! Blocklist implementation

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::domain::{DomainToken, Normalizer};
use crate::error::Error;

/// How a candidate domain is compared against blocklist entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Blocked if the candidate ends with any entry (raw string suffix)
    #[default]
    Suffix,
    /// Blocked only if the candidate equals an entry
    Exact,
}

impl MatchPolicy {
    /// Configuration name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suffix => "suffix",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suffix" | "ends-with" => Ok(Self::Suffix),
            "exact" | "equals" => Ok(Self::Exact),
            other => Err(Error::config_value(
                "policy",
                format!("Unknown match policy: {other}. Expected suffix or exact"),
            )),
        }
    }
}

/// Set of normalized blocklist domains
///
/// Built once per run and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    normalizer: Normalizer,
    domains: HashSet<DomainToken>,
}

impl Blocklist {
    /// Create an empty blocklist with the default normalizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw lines with the default normalizer
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_normalizer(Normalizer::default(), lines)
    }

    /// Build from raw lines, normalizing each one
    ///
    /// Lines that do not normalize to a domain are skipped.
    pub fn with_normalizer<I, S>(normalizer: Normalizer, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domains = HashSet::new();
        let mut skipped = 0usize;

        for line in lines {
            let line = line.as_ref();
            match normalizer.normalize(line) {
                Some(token) => {
                    domains.insert(token);
                }
                None => {
                    trace!("Skipping blocklist entry without a domain: {:?}", line);
                    skipped += 1;
                }
            }
        }

        debug!(
            "Built blocklist with {} domains ({} entries skipped, reducer: {})",
            domains.len(),
            skipped,
            normalizer.reducer_name()
        );

        Self { normalizer, domains }
    }

    /// Normalizer used for entries and candidates
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Check whether a normalized domain is in the set
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Check whether a candidate URL or domain is blocked
    pub fn is_blocked(&self, candidate: &str, policy: MatchPolicy) -> bool {
        self.matching_entry(candidate, policy).is_some()
    }

    /// Return the blocklist entry that blocks `candidate`, if any
    ///
    /// Under suffix policy with several matching entries, the longest one
    /// is reported.
    pub fn matching_entry(&self, candidate: &str, policy: MatchPolicy) -> Option<&DomainToken> {
        let token = self.normalizer.normalize(candidate)?;
        self.match_token(&token, policy)
    }

    /// Match an already normalized token
    pub fn match_token(&self, token: &DomainToken, policy: MatchPolicy) -> Option<&DomainToken> {
        match policy {
            MatchPolicy::Exact => self.domains.get(token.as_str()),
            MatchPolicy::Suffix => self
                .domains
                .iter()
                .filter(|entry| token.as_str().ends_with(entry.as_str()))
                .max_by(|a, b| a.as_str().len().cmp(&b.as_str().len()).then_with(|| b.cmp(a))),
        }
    }

    /// Number of unique domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the blocklist is empty
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// All domains, sorted
    pub fn domains(&self) -> Vec<&DomainToken> {
        let mut result: Vec<&DomainToken> = self.domains.iter().collect();
        result.sort();
        result
    }
}

/// Check whether `candidate` is blocked by `blocklist` under `policy`
///
/// A candidate that does not normalize to a domain is never blocked.
pub fn is_blocked(candidate: &str, blocklist: &Blocklist, policy: MatchPolicy) -> bool {
    blocklist.is_blocked(candidate, policy)
}
