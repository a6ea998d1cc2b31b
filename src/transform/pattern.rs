//! Header name patterns.
//!
//! # Design Decisions
//! - Header names are case-insensitive; `HeaderName` is always lower case,
//!   so prefixes are lower-cased once at parse time
//! - A single trailing `*` is the only wildcard; no regex engine

use axum::http::HeaderName;

use crate::config::InvalidRule;

const WILDCARD: char = '*';

/// Matches header names either exactly or by prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches one header name.
    Exact(HeaderName),
    /// Matches every header name starting with the prefix. An empty prefix
    /// matches all headers.
    Prefix(String),
}

impl Pattern {
    pub fn parse(raw: &str) -> Result<Self, InvalidRule> {
        if raw.is_empty() {
            return Err(InvalidRule::EmptyPattern);
        }

        match raw.find(WILDCARD) {
            None => parse_header_name(raw).map(Pattern::Exact),
            Some(pos) if pos == raw.len() - 1 => {
                let prefix = &raw[..pos];
                if !prefix.is_empty() {
                    parse_header_name(prefix)?;
                }
                Ok(Pattern::Prefix(prefix.to_ascii_lowercase()))
            }
            Some(_) => Err(InvalidRule::MisplacedWildcard(raw.to_owned())),
        }
    }

    pub fn matches(&self, name: &HeaderName) -> bool {
        match self {
            Pattern::Exact(expected) => expected == name,
            Pattern::Prefix(prefix) => name.as_str().starts_with(prefix.as_str()),
        }
    }
}

/// Parse a header name without wildcards.
pub(crate) fn parse_header_name(raw: &str) -> Result<HeaderName, InvalidRule> {
    if raw.is_empty() {
        return Err(InvalidRule::EmptyHeaderName);
    }
    if raw.contains(WILDCARD) {
        return Err(InvalidRule::UnsupportedWildcard(raw.to_owned()));
    }
    HeaderName::from_bytes(raw.as_bytes())
        .map_err(|_| InvalidRule::InvalidHeaderName(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> HeaderName {
        HeaderName::from_bytes(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let pattern = Pattern::parse("X-Test").unwrap();
        assert!(pattern.matches(&name("x-test")));
        assert!(pattern.matches(&name("X-TEST")));
        assert!(!pattern.matches(&name("x-test-2")));
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let pattern = Pattern::parse("Test*").unwrap();
        assert_eq!(pattern, Pattern::Prefix("test".into()));
        assert!(pattern.matches(&name("Test1")));
        assert!(pattern.matches(&name("TESTING")));
        assert!(pattern.matches(&name("test")));
        assert!(!pattern.matches(&name("X-Test")));
    }

    #[test]
    fn test_bare_wildcard_matches_everything() {
        let pattern = Pattern::parse("*").unwrap();
        assert!(pattern.matches(&name("foo")));
        assert!(pattern.matches(&name("x-anything")));
    }

    #[test]
    fn test_rejects_bad_patterns() {
        assert_eq!(Pattern::parse(""), Err(InvalidRule::EmptyPattern));
        assert!(matches!(
            Pattern::parse("X-*-Id"),
            Err(InvalidRule::MisplacedWildcard(_))
        ));
        assert!(matches!(
            Pattern::parse("**"),
            Err(InvalidRule::MisplacedWildcard(_))
        ));
        assert!(matches!(
            Pattern::parse("Bad Name*"),
            Err(InvalidRule::InvalidHeaderName(_))
        ));
    }
}
