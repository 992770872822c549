//! Blocklist matching
//!
//! A [`Blocklist`] is the set of normalized domains built from one
//! blocklist input. Candidates are normalized the same way and compared
//! under a [`MatchPolicy`]:
//! - Suffix matching (`example.com` blocks `mail.example.com`, and also
//!   `notexample.com` since the comparison is a plain string suffix)
//! - Exact matching (hash-set lookup)
//!
//! Candidates that normalize to nothing are never blocked.

mod blocklist;

pub use blocklist::{is_blocked, Blocklist, MatchPolicy};
