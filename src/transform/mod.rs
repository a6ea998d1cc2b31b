//! Header transformation engine.
//!
//! # Data Flow
//! ```text
//! TransformConfig
//!     → RuleSet::compile (parse patterns, names and values once)
//!
//! Per request, against the same HeaderMap:
//!     → rename.rs (replace matching headers with one renamed header)
//!     → set.rs (assign literal values)
//!     → delete.rs (remove named headers, or all of them)
//! ```
//!
//! # Design Decisions
//! - `http::HeaderMap` is the header collection: ordered, case-insensitive,
//!   multi-valued, with lower-case canonical names
//! - The three passes are plain functions so they can be tested alone
//! - Applying a compiled RuleSet cannot fail

pub mod delete;
pub mod pattern;
pub mod rename;
pub mod set;

use axum::http::HeaderMap;

use crate::config::{RuleKind, TransformConfig, ValidationError};

pub use delete::{apply_deletes, DeleteRule};
pub use pattern::Pattern;
pub use rename::{apply_renames, RenameRule};
pub use set::{apply_sets, SetRule};

/// Compiled, immutable rules for one middleware instance.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    renames: Vec<RenameRule>,
    sets: Vec<SetRule>,
    deletes: Vec<DeleteRule>,
}

/// What one application of a RuleSet changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Header names replaced by rename rules.
    pub renamed: usize,
    /// Set rules applied.
    pub set: usize,
    /// Header names removed by delete rules.
    pub deleted: usize,
}

impl RuleSet {
    /// Compile a configuration, collecting every invalid rule.
    pub fn compile(config: &TransformConfig) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let renames = compile_rules(&config.rename, RuleKind::Rename, &mut errors);
        let sets = compile_rules(&config.set, RuleKind::Set, &mut errors);
        let deletes = compile_rules(&config.delete, RuleKind::Delete, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            renames,
            sets,
            deletes,
        })
    }

    /// Run the rename, set and delete passes in that order.
    pub fn apply(&self, headers: &mut HeaderMap) -> TransformStats {
        TransformStats {
            renamed: apply_renames(headers, &self.renames),
            set: apply_sets(headers, &self.sets),
            deleted: apply_deletes(headers, &self.deletes),
        }
    }

    pub fn len(&self) -> usize {
        self.renames.len() + self.sets.len() + self.deletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile_rules<'a, C, R>(
    configs: &'a [C],
    kind: RuleKind,
    errors: &mut Vec<ValidationError>,
) -> Vec<R>
where
    R: TryFrom<&'a C, Error = crate::config::InvalidRule>,
{
    let mut rules = Vec::with_capacity(configs.len());
    for (index, config) in configs.iter().enumerate() {
        match R::try_from(config) {
            Ok(rule) => rules.push(rule),
            Err(reason) => errors.push(ValidationError::new(kind, index, reason)),
        }
    }
    rules
}
