//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http layer / middleware
//!     → tracing events (instance name, per-pass counts)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → whatever subscriber and recorder the host installs
//! ```

pub mod metrics;
