//! Domain normalization
//!
//! Turns a raw line (full URL or bare hostname) into a [`DomainToken`]: the
//! lowercase registrable domain with scheme, userinfo, `www.` prefix, port,
//! path, query and fragment removed.
//!
//! The reduction to a registrable domain is pluggable through the
//! [`DomainReducer`] trait. The default [`NaiveReducer`] keeps the last two
//! labels, which collapses `shop.example.co.uk` to `co.uk`; the
//! [`PublicSuffixReducer`] consults the Public Suffix List instead.

mod public_suffix;
mod reducer;

pub use public_suffix::PublicSuffixReducer;
pub use reducer::{DomainReducer, NaiveReducer, ReducerKind};

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Canonical registrable domain, e.g. `example.com`
///
/// Never empty and never contains `/`. Only produced by [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainToken(String);

impl DomainToken {
    /// Borrow the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DomainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DomainToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Normalize with the default last-two-labels reduction
///
/// Returns `None` when nothing usable remains after stripping.
pub fn normalize(input: &str) -> Option<DomainToken> {
    reduce_with(&NaiveReducer, input)
}

/// Domain normalizer bound to a reduction strategy
#[derive(Clone)]
pub struct Normalizer {
    reducer: Arc<dyn DomainReducer>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(ReducerKind::Naive)
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("reducer", &self.reducer.name())
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer using one of the built-in reducers
    pub fn new(kind: ReducerKind) -> Self {
        Self {
            reducer: kind.build(),
        }
    }

    /// Create a normalizer with a custom reducer
    pub fn with_reducer(reducer: Arc<dyn DomainReducer>) -> Self {
        Self { reducer }
    }

    /// Name of the active reducer
    pub fn reducer_name(&self) -> &'static str {
        self.reducer.name()
    }

    /// Normalize a URL or bare domain
    pub fn normalize(&self, input: &str) -> Option<DomainToken> {
        reduce_with(self.reducer.as_ref(), input)
    }
}

fn reduce_with(reducer: &dyn DomainReducer, input: &str) -> Option<DomainToken> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    let host = host_candidate(&lowered).trim();
    let host = host.strip_prefix("www.").unwrap_or(host);
    // Whitespace may sit before the port or between root dots
    let host = strip_port(host).trim_end_matches(|c: char| c == '.' || c.is_whitespace());

    if host.trim_matches('.').is_empty() {
        return None;
    }

    let reduced = reducer.reduce(host);
    let reduced = reduced.trim();
    if reduced.trim_matches('.').is_empty() {
        return None;
    }

    Some(DomainToken(reduced.to_string()))
}

/// Extract the host portion of a URL, or the whole input when it has no
/// scheme. Userinfo is dropped; the port is left for [`strip_port`].
fn host_candidate(input: &str) -> &str {
    let rest = match input.find("://") {
        Some(pos) if is_scheme(&input[..pos]) => &input[pos + 3..],
        _ => input.strip_prefix("//").unwrap_or(input),
    };

    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];

    match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // Bracketed IPv6 literal; the port follows the closing bracket
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.find(':') {
        Some(pos) => &host[..pos],
        None => host,
    }
}
