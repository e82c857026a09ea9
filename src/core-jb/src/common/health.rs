use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /api/health - liveness only; never touches the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server running".to_string(),
    })
}
