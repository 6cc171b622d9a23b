//! Access log for every request, redirects and pre-flights included.

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Level, debug, info, warn};

/// Logs method, path, status and latency once the response is ready.
///
/// Server faults are logged at `warn`, pre-flight answers at `debug`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis();
    let level = level_for(response.status());
    if level == Level::WARN {
        warn!(%method, %path, status, latency_ms, "Request failed");
    } else if level == Level::DEBUG {
        debug!(%method, %path, status, latency_ms, "Request answered");
    } else {
        info!(%method, %path, status, latency_ms, "Request handled");
    }

    response
}

fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::WARN
    } else if status == StatusCode::NO_CONTENT {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
