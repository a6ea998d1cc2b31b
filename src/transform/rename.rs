//! Rename pass.
//!
//! Each rule collects the headers matching its pattern, removes all of
//! them and writes a single header under the replacement name. A rule
//! without a replacement name only removes. A rule that matches nothing
//! leaves the map untouched.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{InvalidRule, RenameConfig, RenameMode};
use crate::transform::pattern::{parse_header_name, Pattern};

#[derive(Debug, Clone)]
pub struct RenameRule {
    pattern: Pattern,
    with: Option<HeaderName>,
    mode: RenameMode,
}

impl RenameRule {
    pub fn new(pattern: Pattern, with: Option<HeaderName>, mode: RenameMode) -> Self {
        Self { pattern, with, mode }
    }

    /// Apply the rule, returning the number of header names it replaced.
    pub fn apply(&self, headers: &mut HeaderMap) -> usize {
        let matched: Vec<HeaderName> = headers
            .keys()
            .filter(|name| self.pattern.matches(name))
            .cloned()
            .collect();

        if matched.is_empty() {
            return 0;
        }

        let Some(with) = &self.with else {
            for name in &matched {
                tracing::trace!(header = %name, "Dropping header on empty rename");
                headers.remove(name);
            }
            return matched.len();
        };

        let mut captured: Vec<HeaderValue> = Vec::new();
        for name in &matched {
            tracing::trace!(from = %name, to = %with, "Renaming header");
            let values = headers.get_all(name).iter().cloned();
            match self.mode {
                RenameMode::Last => {
                    if let Some(last) = values.last() {
                        captured = vec![last];
                    }
                }
                RenameMode::KeepAll => captured.extend(values),
            }
        }

        for name in &matched {
            headers.remove(name);
        }

        // Appending keeps any header already stored under the replacement
        // name that the pattern did not match.
        for value in captured {
            headers.append(with.clone(), value);
        }

        matched.len()
    }
}

impl TryFrom<&RenameConfig> for RenameRule {
    type Error = InvalidRule;

    fn try_from(config: &RenameConfig) -> Result<Self, Self::Error> {
        let pattern = Pattern::parse(&config.header)?;
        let with = if config.with.is_empty() {
            None
        } else {
            Some(parse_header_name(&config.with)?)
        };
        Ok(Self::new(pattern, with, config.mode))
    }
}

/// Apply rename rules in order, each against the map as left by the
/// previous one.
pub fn apply_renames(headers: &mut HeaderMap, rules: &[RenameRule]) -> usize {
    rules.iter().map(|rule| rule.apply(headers)).sum()
}
