use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Level;

/// Log level for a finished request: client errors warn, server errors error.
fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Middleware that logs each route access with its status and latency
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    match level_for(response.status()) {
        Level::ERROR => tracing::error!(%method, %path, status, duration_ms),
        Level::WARN => tracing::warn!(%method, %path, status, duration_ms),
        _ => tracing::info!(%method, %path, status, duration_ms),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(StatusCode::OK), Level::INFO);
        assert_eq!(level_for(StatusCode::CREATED), Level::INFO);
        assert_eq!(level_for(StatusCode::NOT_FOUND), Level::WARN);
        assert_eq!(level_for(StatusCode::BAD_REQUEST), Level::WARN);
        assert_eq!(level_for(StatusCode::INTERNAL_SERVER_ERROR), Level::ERROR);
    }
}
