//! Per-request access logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use explorer_core::error::ErrorKind;

/// Logs one line per request with its outcome.
///
/// Failed requests carry the [`ErrorKind`] the error mapping attached to the
/// response and are logged at `warn`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match response.extensions().get::<ErrorKind>() {
        Some(kind) => warn!(
            %method,
            %path,
            status,
            error_kind = %kind,
            elapsed_ms,
            "Folder API request failed"
        ),
        None => info!(%method, %path, status, elapsed_ms, "Folder API request"),
    }

    response
}
