//! Delete pass.

use axum::http::{HeaderMap, HeaderName};

use crate::config::{DeleteConfig, InvalidRule};
use crate::transform::pattern::parse_header_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRule {
    /// Empty pattern: wipe the whole map.
    All,
    Exact(HeaderName),
}

impl DeleteRule {
    /// Apply the rule, returning the number of header names removed.
    pub fn apply(&self, headers: &mut HeaderMap) -> usize {
        match self {
            DeleteRule::All => {
                let removed = headers.keys_len();
                headers.clear();
                removed
            }
            DeleteRule::Exact(name) => {
                if headers.remove(name).is_some() {
                    tracing::trace!(header = %name, "Deleted header");
                    1
                } else {
                    0
                }
            }
        }
    }
}

impl TryFrom<&DeleteConfig> for DeleteRule {
    type Error = InvalidRule;

    fn try_from(config: &DeleteConfig) -> Result<Self, Self::Error> {
        if config.header.is_empty() {
            return Ok(DeleteRule::All);
        }
        parse_header_name(&config.header).map(DeleteRule::Exact)
    }
}

pub fn apply_deletes(headers: &mut HeaderMap, rules: &[DeleteRule]) -> usize {
    rules.iter().map(|rule| rule.apply(headers)).sum()
}
