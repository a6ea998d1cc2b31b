//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check header names and values are legal HTTP tokens
//! - Check rename patterns carry at most one trailing wildcard
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TransformConfig → Result<(), Vec<ValidationError>>
//! - Runs before the middleware is installed

use std::fmt;

use crate::config::schema::TransformConfig;
use crate::transform::RuleSet;

/// The rule list an error was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Rename,
    Set,
    Delete,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleKind::Rename => "rename",
            RuleKind::Set => "set",
            RuleKind::Delete => "delete",
        })
    }
}

/// Why a single rule was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRule {
    #[error("header pattern must not be empty")]
    EmptyPattern,

    #[error("wildcard is only allowed as the last character: {0:?}")]
    MisplacedWildcard(String),

    #[error("wildcards are not supported here: {0:?}")]
    UnsupportedWildcard(String),

    #[error("header name must not be empty")]
    EmptyHeaderName,

    #[error("invalid header name: {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid header value for {0:?}")]
    InvalidHeaderValue(String),
}

/// A rejected rule, located by list and position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}[{index}]: {reason}")]
pub struct ValidationError {
    pub kind: RuleKind,
    pub index: usize,
    #[source]
    pub reason: InvalidRule,
}

impl ValidationError {
    pub fn new(kind: RuleKind, index: usize, reason: InvalidRule) -> Self {
        Self { kind, index, reason }
    }
}

/// Validate a configuration, collecting every rejected rule.
pub fn validate_config(config: &TransformConfig) -> Result<(), Vec<ValidationError>> {
    RuleSet::compile(config).map(|_| ())
}
