//! Request header transformer for reverse-proxy pipelines.
//!
//! Applies three ordered rule passes to every request before it is
//! forwarded: rename, then set, then delete.
//!
//! ```text
//! request → rename pass → set pass → delete pass → next handler
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod transform;

pub use config::{load_config, ConfigError, TransformConfig};
pub use http::{header_transform_middleware, HeaderTransform, HeaderTransformLayer, TransformState};
pub use transform::{RuleSet, TransformStats};
