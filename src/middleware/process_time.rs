//! Request timing middleware

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Logs method, path, status and duration for every request, and reports
/// the handling time back to the client in an `X-Process-Time` header.
pub async fn track(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    let elapsed = start.elapsed().as_secs_f64();
    tracing::info!(
        "Method: {} Path: {} Status: {} Duration: {:.4}s",
        method,
        path,
        response.status().as_u16(),
        elapsed
    );

    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert("x-process-time", value);
    }

    response
}
