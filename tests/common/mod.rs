//! Shared utilities for integration testing.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use axum::response::Response;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a test subscriber; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "header_transformer=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// A terminal service that hands the forwarded request back to the caller
/// and counts how often it was invoked.
#[allow(dead_code)]
pub fn echo_service(
    calls: Arc<AtomicUsize>,
) -> impl tower::Service<Request<Body>, Response = Request<Body>, Error = Infallible> + Clone {
    tower::service_fn(move |req: Request<Body>| {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(req)
        }
    })
}

/// Build a GET request carrying the given headers, in order.
#[allow(dead_code)]
pub fn request_with(headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri("http://localhost/");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Render the headers an axum echo handler received as sorted `name=value` lines.
#[allow(dead_code)]
pub fn render_headers(headers: &HeaderMap) -> String {
    let mut lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| format!("{}={}", name, value.to_str().unwrap_or("<binary>")))
        .collect();
    lines.sort();
    lines.join("\n")
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
