//! Storage abstraction for the two collections.
//!
//! Handlers never talk to a database directly: they receive a [`SharedStore`]
//! chosen at startup, either [`PgStore`] or [`MemoryStore`].

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::PoolError;
use crate::models::{Application, Job, JobType};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("Database pool error: {0}")]
    Pool(String),
}

impl From<PoolError> for StoreError {
    fn from(error: PoolError) -> Self {
        Self::Pool(format!("{:?}", error))
    }
}

pub type SharedStore = Arc<dyn JobBoardStore>;

#[async_trait]
pub trait JobBoardStore: Send + Sync {
    /// Short name for logs.
    fn backend(&self) -> &'static str;

    /// All jobs, optionally only those of `job_type`, newest `created_at` first.
    async fn list_jobs(&self, job_type: Option<JobType>) -> Result<Vec<Job>, StoreError>;

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>, StoreError>;

    /// Jobs whose ids are in `ids`, in no particular order. Unknown ids are skipped.
    async fn get_jobs(&self, ids: &[Uuid]) -> Result<Vec<Job>, StoreError>;

    async fn insert_job(&self, job: Job) -> Result<Job, StoreError>;

    async fn insert_application(&self, application: Application) -> Result<Application, StoreError>;

    /// All applications, newest `applied_at` first.
    async fn list_applications(&self) -> Result<Vec<Application>, StoreError>;

    /// Applications whose `job_id` equals `job_id` exactly, newest `applied_at` first.
    async fn list_applications_for_job(&self, job_id: &str) -> Result<Vec<Application>, StoreError>;
}
