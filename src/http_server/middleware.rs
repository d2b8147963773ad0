//! Request logging middleware
//!
//! Observes each request and its outcome. Never alters either.

use axum::{extract::Request, middleware::Next, response::Response};
use uuid::Uuid;

/// Log method, URI and final status of every request under one request id
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::debug!(%request_id, %method, %uri, "request received");

    let response = next.run(request).await;

    tracing::debug!(
        %request_id,
        %method,
        %uri,
        status = response.status().as_u16(),
        "request completed"
    );

    response
}
