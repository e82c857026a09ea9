use chrono::Utc;
use uuid::Uuid;

use data_model_jb::errors::ApiError;
use data_model_jb::models::{Job, JobPayload, JobType};
use data_model_jb::store::JobBoardStore;

use super::store_failure;

pub const JOB_NOT_FOUND: &str = "Job not found";

/// Lists jobs newest first.
///
/// A missing or empty `type_filter` lists everything. A filter that names no known
/// employment type matches nothing, so the result is empty rather than an error.
pub async fn list_jobs(store: &dyn JobBoardStore, type_filter: Option<&str>) -> Result<Vec<Job>, ApiError> {
    let job_type = match type_filter.filter(|raw| !raw.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<JobType>() {
            Ok(job_type) => Some(job_type),
            Err(e) => {
                tracing::debug!("filter matches no jobs: {}", e);
                return Ok(Vec::new());
            }
        },
    };

    store.list_jobs(job_type).await.map_err(store_failure("list_jobs"))
}

/// Fetches one job. Ids that are not even well-formed are reported as not found too.
pub async fn get_job(store: &dyn JobBoardStore, id: &str) -> Result<Job, ApiError> {
    let not_found = || ApiError::NotFound(JOB_NOT_FOUND.to_string());

    let id = Uuid::parse_str(id).map_err(|_| not_found())?;
    store
        .get_job(id)
        .await
        .map_err(store_failure("get_job"))?
        .ok_or_else(not_found)
}

pub async fn create_job(store: &dyn JobBoardStore, payload: JobPayload) -> Result<Job, ApiError> {
    let new_job = payload.validate()?;
    let job = new_job.into_job(Uuid::new_v4(), Utc::now());

    let job = store.insert_job(job).await.map_err(store_failure("insert_job"))?;
    tracing::info!(job_id = %job.id, job_type = %job.job_type, "created job");
    Ok(job)
}
