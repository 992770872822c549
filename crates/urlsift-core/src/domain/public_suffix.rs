//! Public Suffix List aware reduction

use tracing::trace;

use super::{DomainReducer, NaiveReducer};

/// Reduces a host to eTLD+1 using the Public Suffix List bundled with `addr`
///
/// `shop.example.co.uk` becomes `example.co.uk`. Hosts without a
/// registrable part (a bare suffix, IP literals, names `addr` rejects)
/// fall back to [`NaiveReducer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixReducer;

impl DomainReducer for PublicSuffixReducer {
    fn name(&self) -> &'static str {
        "public-suffix"
    }

    fn reduce(&self, host: &str) -> String {
        match addr::parse_domain_name(host) {
            Ok(name) => match name.root() {
                Some(root) => root.to_string(),
                None => NaiveReducer::last_two_labels(host).to_string(),
            },
            Err(_) => {
                trace!("Not a domain name, using last two labels: {}", host);
                NaiveReducer::last_two_labels(host).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_part_suffix() {
        let reducer = PublicSuffixReducer;
        assert_eq!(reducer.reduce("shop.example.co.uk"), "example.co.uk");
        assert_eq!(reducer.reduce("a.b.example.com.au"), "example.com.au");
    }

    #[test]
    fn test_simple_suffix() {
        let reducer = PublicSuffixReducer;
        assert_eq!(reducer.reduce("mail.example.com"), "example.com");
        assert_eq!(reducer.reduce("example.com"), "example.com");
    }

    #[test]
    fn test_fallback() {
        let reducer = PublicSuffixReducer;
        assert_eq!(reducer.reduce("co.uk"), "co.uk");
        assert_eq!(reducer.reduce("[::1]"), "[::1]");
    }
}
