//! Tower integration.
//!
//! `HeaderTransformLayer` wraps any `Service<Request<B>>`; the resulting
//! `HeaderTransform` rewrites headers and forwards to the inner service
//! exactly once. Readiness is delegated to the inner service.

use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::config::{ConfigError, TransformConfig};
use crate::http::state::TransformState;

#[derive(Debug, Clone)]
pub struct HeaderTransformLayer {
    state: TransformState,
}

impl HeaderTransformLayer {
    pub fn new(config: &TransformConfig, name: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::from_state(TransformState::new(config, name)?))
    }

    pub fn from_state(state: TransformState) -> Self {
        Self { state }
    }
}

impl<S> Layer<S> for HeaderTransformLayer {
    type Service = HeaderTransform<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HeaderTransform {
            inner,
            state: self.state.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeaderTransform<S> {
    inner: S,
    state: TransformState,
}

impl<S> HeaderTransform<S> {
    /// Build the handler for `next` from a configuration and instance name.
    pub fn new(
        next: S,
        config: &TransformConfig,
        name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(HeaderTransformLayer::new(config, name)?.layer(next))
    }
}

impl<S, B> Service<Request<B>> for HeaderTransform<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        self.state.transform(&mut req);
        self.inner.call(req)
    }
}
