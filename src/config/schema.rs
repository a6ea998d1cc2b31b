//! Configuration schema definitions.
//!
//! This module defines the rule configuration consumed by the header
//! transformer. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration: three ordered rule lists, one per pass.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TransformConfig {
    /// Rename rules, applied first.
    pub rename: Vec<RenameConfig>,

    /// Set rules, applied after renames.
    pub set: Vec<SetConfig>,

    /// Delete rules, applied last.
    pub delete: Vec<DeleteConfig>,
}

impl TransformConfig {
    /// Total number of rules across all passes.
    pub fn rule_count(&self) -> usize {
        self.rename.len() + self.set.len() + self.delete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }
}

/// Rename every header matching `header` to `with`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RenameConfig {
    /// Exact header name, or a prefix followed by a single trailing `*`.
    pub header: String,

    /// Name of the header written in place of the matches. Empty removes
    /// the matches without writing anything.
    #[serde(default)]
    pub with: String,

    /// What to keep when the pattern matches more than one value.
    #[serde(default)]
    pub mode: RenameMode,
}

/// Value retention policy for a rename that matches several headers.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RenameMode {
    /// Keep only the value of the last matched header visited.
    #[default]
    Last,

    /// Keep every matched value, in scan order.
    KeepAll,
}

/// Assign a literal value to a header.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SetConfig {
    /// Exact header name.
    pub header: String,

    /// Value written, replacing any existing values.
    pub value: String,
}

/// Remove a header, or every header when `header` is empty.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DeleteConfig {
    #[serde(default)]
    pub header: String,
}
