use axum::{
    extract::{
        Json, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use data_model_jb::errors::ApiError;
use data_model_jb::models::{JobPayload, JobsQuery};
use data_model_jb::store::SharedStore;

use crate::services;

/// GET /api/jobs?type= - List jobs, newest first, optionally of one employment type
pub async fn get_jobs(
    State(store): State<SharedStore>,
    query: Result<Query<JobsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let jobs = services::jobs::list_jobs(store.as_ref(), query.job_type.as_deref()).await?;
    Ok((StatusCode::OK, Json(jobs)))
}

/// GET /api/jobs/{id} - Fetch one job
pub async fn get_job(State(store): State<SharedStore>, Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let job = services::jobs::get_job(store.as_ref(), &id).await?;
    Ok((StatusCode::OK, Json(job)))
}

/// POST /api/jobs - Create a job
pub async fn post_job(
    State(store): State<SharedStore>,
    payload: Result<Json<JobPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let job = services::jobs::create_job(store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(job)))
}
