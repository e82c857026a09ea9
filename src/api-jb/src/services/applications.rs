use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use data_model_jb::errors::ApiError;
use data_model_jb::models::{
    APPLICATION_SUBMITTED_MESSAGE, Application, ApplicationPayload, ApplicationSubmitted, ApplicationWithJob,
    JobSummary,
};
use data_model_jb::store::JobBoardStore;

use super::store_failure;

/// Validates and stores an application.
///
/// `job_id` is stored as given: whether it names an existing job is not checked.
pub async fn submit_application(
    store: &dyn JobBoardStore,
    payload: ApplicationPayload,
) -> Result<ApplicationSubmitted, ApiError> {
    let new_application = payload.validate()?;
    let application = new_application.into_application(Uuid::new_v4(), Utc::now());

    let application = store
        .insert_application(application)
        .await
        .map_err(store_failure("insert_application"))?;
    tracing::info!(application_id = %application.id, job_id = %application.job_id, "application submitted");

    Ok(ApplicationSubmitted {
        message: APPLICATION_SUBMITTED_MESSAGE.to_string(),
        application,
    })
}

/// All applications, newest first, each joined with a summary of its job.
///
/// The join is a second lookup over the distinct referenced ids. Applications whose
/// job is missing (or whose `job_id` is not a job id at all) keep their row with a
/// `None` summary.
pub async fn list_applications(store: &dyn JobBoardStore) -> Result<Vec<ApplicationWithJob>, ApiError> {
    let applications = store
        .list_applications()
        .await
        .map_err(store_failure("list_applications"))?;

    let mut referenced: Vec<Uuid> = applications
        .iter()
        .filter_map(|a| Uuid::parse_str(&a.job_id).ok())
        .collect();
    referenced.sort_unstable();
    referenced.dedup();

    let summaries: HashMap<Uuid, JobSummary> = store
        .get_jobs(&referenced)
        .await
        .map_err(store_failure("get_jobs"))?
        .iter()
        .map(|job| (job.id, JobSummary::from(job)))
        .collect();

    Ok(applications
        .into_iter()
        .map(|application| {
            let summary = Uuid::parse_str(&application.job_id)
                .ok()
                .and_then(|id| summaries.get(&id).cloned());
            ApplicationWithJob::join(application, summary)
        })
        .collect())
}

/// Applications for one job id, newest first, without the job join.
pub async fn list_applications_for_job(
    store: &dyn JobBoardStore,
    job_id: &str,
) -> Result<Vec<Application>, ApiError> {
    store
        .list_applications_for_job(job_id)
        .await
        .map_err(store_failure("list_applications_for_job"))
}
