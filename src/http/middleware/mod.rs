//! Axum function middleware.

pub mod header_transform;

pub use header_transform::header_transform_middleware;
