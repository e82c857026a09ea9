use std::path::Path;

use axum::{
    Router, middleware,
    routing::{any, get},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use core_jb::health_check;
use data_model_jb::errors::ApiError;
use data_model_jb::store::SharedStore;

pub mod applications;
pub mod jobs;
pub mod logging_middleware;

//
// Router
//

/// The JSON API under `/api`, with access logging and tracing. Unknown `/api` paths
/// and unsupported methods answer with the usual `{ "error": ... }` body.
pub fn router() -> Router<SharedStore> {
    api_routes()
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        .layer(TraceLayer::new_for_http())
}

/// The JSON API plus the built frontend from `frontend_dir`: `/pkg` serves the wasm
/// bundle and every other unknown path falls back to `index.html` for client-side routing.
pub fn router_with_frontend(frontend_dir: &Path) -> Router<SharedStore> {
    api_routes()
        .nest_service("/pkg", ServeDir::new(frontend_dir.join("pkg")))
        .fallback_service(ServeFile::new(frontend_dir.join("index.html")))
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<SharedStore> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/jobs", get(jobs::get_jobs).post(jobs::post_job))
        .route("/api/jobs/{id}", get(jobs::get_job))
        .route(
            "/api/applications",
            get(applications::get_applications).post(applications::post_application),
        )
        .route("/api/applications/{job_id}", get(applications::get_applications_for_job))
        .route("/api", any(api_not_found))
        .route("/api/{*rest}", any(api_not_found))
        .method_not_allowed_fallback(api_method_not_allowed)
}

/// Unknown paths under `/api` get a JSON 404 rather than the frontend's `index.html`.
async fn api_not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

async fn api_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed".to_string())
}
