//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! host pipeline request
//!     → layer.rs (tower Service) or middleware/ (axum fn middleware)
//!     → state.rs (apply compiled rules, log, record metrics)
//!     → next handler, called exactly once
//! ```
//!
//! # Design Decisions
//! - Construction is the only fallible step
//! - Rules are shared read-only via Arc; no locking on the request path

pub mod layer;
pub mod middleware;
pub mod state;

pub use layer::{HeaderTransform, HeaderTransformLayer};
pub use middleware::header_transform_middleware;
pub use state::TransformState;
