// src/presentation/http/middleware/action_filter.rs
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs around a handler: once before it runs and once with the outcome.
pub async fn action_filter(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::info!(%method, %path, "executing action");

    let started = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "action failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "action executed");
    }

    response
}
