use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{JobBoardStore, StoreError};
use crate::models::{Application, Job, JobType};

/// Process-local store used when no database is configured, and by tests.
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    jobs: RwLock<Vec<Job>>,
    applications: RwLock<Vec<Application>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; among equal timestamps the later insert wins.
fn newest_first<T: Clone, K: Ord>(records: &[T], predicate: impl Fn(&T) -> bool, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut selected: Vec<T> = records.iter().rev().filter(|r| predicate(r)).cloned().collect();
    selected.sort_by(|a, b| key(b).cmp(&key(a)));
    selected
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_jobs(&self, job_type: Option<JobType>) -> Result<Vec<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(newest_first(
            jobs.as_slice(),
            |job| job_type.is_none_or(|t| job.job_type == t),
            |job| job.created_at,
        ))
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn get_jobs(&self, ids: &[Uuid]) -> Result<Vec<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().filter(|job| ids.contains(&job.id)).cloned().collect())
    }

    async fn insert_job(&self, job: Job) -> Result<Job, StoreError> {
        let mut jobs = self.jobs.write().await;
        jobs.push(job.clone());
        tracing::debug!(id = %job.id, total = jobs.len(), "Stored job in memory");
        Ok(job)
    }

    async fn insert_application(&self, application: Application) -> Result<Application, StoreError> {
        let mut applications = self.applications.write().await;
        applications.push(application.clone());
        tracing::debug!(id = %application.id, total = applications.len(), "Stored application in memory");
        Ok(application)
    }

    async fn list_applications(&self) -> Result<Vec<Application>, StoreError> {
        let applications = self.applications.read().await;
        Ok(newest_first(applications.as_slice(), |_| true, |a| a.applied_at))
    }

    async fn list_applications_for_job(&self, job_id: &str) -> Result<Vec<Application>, StoreError> {
        let applications = self.applications.read().await;
        Ok(newest_first(applications.as_slice(), |a| a.job_id == job_id, |a| a.applied_at))
    }
}
