//! Shared per-instance state.

use std::sync::Arc;

use axum::http::Request;

use crate::config::{ConfigError, TransformConfig};
use crate::observability::metrics;
use crate::transform::{RuleSet, TransformStats};

/// Compiled rules plus the instance name, cheap to clone into every
/// service and handler.
#[derive(Debug, Clone)]
pub struct TransformState {
    rules: Arc<RuleSet>,
    name: Arc<str>,
}

impl TransformState {
    /// Validate and compile the configuration. Fails if any rule is invalid,
    /// in which case the middleware must not be installed.
    pub fn new(config: &TransformConfig, name: impl Into<String>) -> Result<Self, ConfigError> {
        let name: String = name.into();
        let rules = RuleSet::compile(config)?;

        tracing::info!(
            instance = %name,
            rename_rules = config.rename.len(),
            set_rules = config.set.len(),
            delete_rules = config.delete.len(),
            "Header transformer initialized"
        );

        Ok(Self {
            rules: Arc::new(rules),
            name: name.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rewrite the request headers in place.
    pub fn transform<B>(&self, req: &mut Request<B>) -> TransformStats {
        let stats = self.rules.apply(req.headers_mut());

        tracing::debug!(
            instance = %self.name,
            path = %req.uri().path(),
            renamed = stats.renamed,
            set = stats.set,
            deleted = stats.deleted,
            "Request headers transformed"
        );
        metrics::record_request(&self.name, &stats);

        stats
    }
}
