use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use data_model_jb::errors::ApiError;
use data_model_jb::models::ApplicationPayload;
use data_model_jb::store::SharedStore;

use crate::services;

/// POST /api/applications - Submit an application
pub async fn post_application(
    State(store): State<SharedStore>,
    payload: Result<Json<ApplicationPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let submitted = services::applications::submit_application(store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(submitted)))
}

/// GET /api/applications - All applications with their job summary (admin view)
pub async fn get_applications(State(store): State<SharedStore>) -> Result<impl IntoResponse, ApiError> {
    let applications = services::applications::list_applications(store.as_ref()).await?;
    Ok((StatusCode::OK, Json(applications)))
}

/// GET /api/applications/{job_id} - Applications for one job
pub async fn get_applications_for_job(
    State(store): State<SharedStore>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let applications = services::applications::list_applications_for_job(store.as_ref(), &job_id).await?;
    Ok((StatusCode::OK, Json(applications)))
}
