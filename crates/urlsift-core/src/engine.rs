//! Filter engine
//!
//! Builds the blocklist, then partitions the URL list into kept and removed
//! lines in a single pass. Input order is preserved in both outputs.

use serde::Serialize;
use tracing::{info, instrument, trace};

use crate::config::FilterConfig;
use crate::domain::Normalizer;
use crate::error::{Error, Result};
use crate::filter::{Blocklist, MatchPolicy};
use crate::loader::load_lines;

/// Counters reported for a filtering run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterSummary {
    /// Number of input URL lines
    pub total: usize,
    /// Number of unique normalized blocklist domains
    pub blocklist_domains: usize,
    /// Number of kept lines
    pub kept: usize,
    /// Number of removed lines
    pub removed: usize,
}

/// Result of a filtering run
///
/// `kept` and `removed` partition the input: every line appears in exactly
/// one of them, in its original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// Lines not matched by the blocklist
    pub kept: Vec<String>,
    /// Lines matched by the blocklist
    pub removed: Vec<String>,
    /// Unique blocklist domain count
    pub blocklist_domains: usize,
}

impl FilterOutcome {
    /// Counters for display
    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            total: self.kept.len() + self.removed.len(),
            blocklist_domains: self.blocklist_domains,
            kept: self.kept.len(),
            removed: self.removed.len(),
        }
    }

    /// Kept lines joined with `\n`
    pub fn kept_text(&self) -> String {
        self.kept.join("\n")
    }

    /// Removed lines joined with `\n`
    pub fn removed_text(&self) -> String {
        self.removed.join("\n")
    }
}

/// Filter engine: a normalizer and a match policy
#[derive(Debug, Clone, Default)]
pub struct Engine {
    normalizer: Normalizer,
    policy: MatchPolicy,
}

impl Engine {
    /// Create an engine
    pub fn new(normalizer: Normalizer, policy: MatchPolicy) -> Self {
        Self { normalizer, policy }
    }

    /// Create an engine from configuration
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(Normalizer::new(config.reducer), config.policy)
    }

    /// Active match policy
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Active normalizer
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Build a blocklist with this engine's normalizer
    pub fn blocklist<I, S>(&self, lines: I) -> Blocklist
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Blocklist::with_normalizer(self.normalizer.clone(), lines)
    }

    /// Filter already loaded lines
    #[instrument(skip_all, fields(policy = %self.policy, urls = url_lines.len()))]
    pub fn run(&self, url_lines: &[String], blocklist_lines: &[String]) -> FilterOutcome {
        let blocklist = self.blocklist(blocklist_lines);
        let outcome = self.partition(url_lines, &blocklist);

        info!(
            "Filtered {} URLs against {} blocklist domains: {} kept, {} removed",
            url_lines.len(),
            outcome.blocklist_domains,
            outcome.kept.len(),
            outcome.removed.len()
        );

        outcome
    }

    /// Decode both buffers and filter them
    pub fn run_bytes(&self, url_bytes: &[u8], blocklist_bytes: &[u8]) -> Result<FilterOutcome> {
        let url_lines = load_lines(url_bytes).map_err(|e| Error::input("URL list", e))?;
        let blocklist_lines =
            load_lines(blocklist_bytes).map_err(|e| Error::input("blocklist", e))?;

        Ok(self.run(&url_lines, &blocklist_lines))
    }

    /// Partition lines against a prebuilt blocklist
    pub fn partition(&self, url_lines: &[String], blocklist: &Blocklist) -> FilterOutcome {
        let mut kept = Vec::new();
        let mut removed = Vec::new();

        for line in url_lines {
            if blocklist.is_blocked(line, self.policy) {
                trace!("Removed: {}", line);
                removed.push(line.clone());
            } else {
                kept.push(line.clone());
            }
        }

        FilterOutcome {
            kept,
            removed,
            blocklist_domains: blocklist.len(),
        }
    }
}

/// Filter URL lines against blocklist lines with the default normalizer
pub fn filter(url_lines: &[String], blocklist_lines: &[String], policy: MatchPolicy) -> FilterOutcome {
    Engine::new(Normalizer::default(), policy).run(url_lines, blocklist_lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let urls = lines(&[
            "https://a.example.com/1",
            "https://keep.org/2",
            "http://b.example.com/3",
            "https://keep.net/4",
        ]);
        let blocklist = lines(&["example.com"]);

        let outcome = filter(&urls, &blocklist, MatchPolicy::Suffix);
        assert_eq!(outcome.kept, lines(&["https://keep.org/2", "https://keep.net/4"]));
        assert_eq!(
            outcome.removed,
            lines(&["https://a.example.com/1", "http://b.example.com/3"])
        );
    }

    #[test]
    fn test_summary_counts() {
        let urls = lines(&["a.com", "b.com", "c.com", "not a url ::"]);
        let blocklist = lines(&["a.com", "https://www.a.com/", "c.com", "http://"]);

        let summary = filter(&urls, &blocklist, MatchPolicy::Exact).summary();
        assert_eq!(
            summary,
            FilterSummary {
                total: 4,
                blocklist_domains: 2,
                kept: 2,
                removed: 2,
            }
        );
        assert_eq!(summary.kept + summary.removed, summary.total);
    }

    #[test]
    fn test_empty_inputs() {
        let outcome = filter(&[], &lines(&["example.com"]), MatchPolicy::Suffix);
        assert!(outcome.kept.is_empty());
        assert!(outcome.removed.is_empty());
        assert_eq!(outcome.summary().total, 0);

        let urls = lines(&["example.com", "other.org"]);
        let outcome = filter(&urls, &[], MatchPolicy::Suffix);
        assert_eq!(outcome.kept, urls);
        assert!(outcome.removed.is_empty());
    }

    #[test]
    fn test_output_text() {
        let urls = lines(&["a.com/x", "b.com/y", "a.com/z"]);
        let outcome = filter(&urls, &lines(&["a.com"]), MatchPolicy::Exact);
        assert_eq!(outcome.kept_text(), "b.com/y");
        assert_eq!(outcome.removed_text(), "a.com/x\na.com/z");
    }

    #[test]
    fn test_run_bytes_reports_failing_input() {
        let engine = Engine::default();
        let err = engine.run_bytes(b"example.com", b"\xFF\x81\xFE").unwrap_err();
        assert!(err.to_string().contains("blocklist"));

        let err = engine.run_bytes(b"\xFF\x81\xFE", b"example.com").unwrap_err();
        assert!(err.to_string().contains("URL list"));
    }

    #[test]
    fn test_run_bytes() {
        let engine = Engine::new(Normalizer::default(), MatchPolicy::Suffix);
        let outcome = engine
            .run_bytes(
                b"https://mail.example.com/a\r\n\r\nhttps://site.org/b\n",
                b"example.com\n   \n",
            )
            .unwrap();
        assert_eq!(outcome.kept, lines(&["https://site.org/b"]));
        assert_eq!(outcome.removed, lines(&["https://mail.example.com/a"]));
        assert_eq!(outcome.blocklist_domains, 1);
    }
}
