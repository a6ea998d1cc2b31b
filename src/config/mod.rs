//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or host-supplied TransformConfig
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → TransformConfig (validated)
//!     → compiled once into a RuleSet, shared via Arc by every request
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the middleware is built
//! - Every rule list defaults to empty; an empty config is a passthrough
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DeleteConfig, RenameConfig, RenameMode, SetConfig, TransformConfig};
pub use validation::{validate_config, InvalidRule, RuleKind, ValidationError};
