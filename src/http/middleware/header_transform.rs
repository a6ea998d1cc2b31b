//! Header Transform Middleware.
//! Rewrites request headers before the request reaches the next handler.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::state::TransformState;

/// Use with `axum::middleware::from_fn_with_state`. Never rejects a request.
pub async fn header_transform_middleware(
    State(state): State<TransformState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    state.transform(&mut req);
    next.run(req).await
}
