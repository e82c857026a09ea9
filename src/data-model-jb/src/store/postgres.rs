use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::{JobBoardStore, StoreError};
use crate::db::DbPool;
use crate::models::{Application, Job, JobType};
use crate::schema::{applications, jobs};

/// PostgreSQL-backed store. Each call checks a connection out of the pool and
/// runs a single statement, so isolation is whatever PostgreSQL gives one statement.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl JobBoardStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_jobs(&self, job_type: Option<JobType>) -> Result<Vec<Job>, StoreError> {
        let mut conn = self.pool.get().await?;

        let mut query: jobs::BoxedQuery<'_, Pg> = jobs::table.into_boxed();
        if let Some(job_type) = job_type {
            query = query.filter(jobs::job_type.eq(job_type));
        }

        let rows = query
            .order(jobs::created_at.desc())
            .select(Job::as_select())
            .load(&mut conn)
            .await?;
        tracing::debug!(job_type = ?job_type, count = rows.len(), "Loaded jobs");
        Ok(rows)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        let mut conn = self.pool.get().await?;
        let job = jobs::table
            .find(id)
            .select(Job::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        tracing::debug!(%id, found = job.is_some(), "Looked up job");
        Ok(job)
    }

    async fn get_jobs(&self, ids: &[Uuid]) -> Result<Vec<Job>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await?;
        let rows = jobs::table
            .filter(jobs::id.eq_any(ids))
            .select(Job::as_select())
            .load(&mut conn)
            .await?;
        tracing::debug!(requested = ids.len(), found = rows.len(), "Resolved job references");
        Ok(rows)
    }

    async fn insert_job(&self, job: Job) -> Result<Job, StoreError> {
        let mut conn = self.pool.get().await?;
        // Read back what was stored: timestamps lose precision in the round trip.
        let stored = diesel::insert_into(jobs::table)
            .values(&job)
            .returning(Job::as_returning())
            .get_result(&mut conn)
            .await?;
        tracing::debug!(id = %stored.id, "Inserted job");
        Ok(stored)
    }

    async fn insert_application(&self, application: Application) -> Result<Application, StoreError> {
        let mut conn = self.pool.get().await?;
        let stored = diesel::insert_into(applications::table)
            .values(&application)
            .returning(Application::as_returning())
            .get_result(&mut conn)
            .await?;
        tracing::debug!(id = %stored.id, job_id = %stored.job_id, "Inserted application");
        Ok(stored)
    }

    async fn list_applications(&self) -> Result<Vec<Application>, StoreError> {
        let mut conn = self.pool.get().await?;
        let rows = applications::table
            .order(applications::applied_at.desc())
            .select(Application::as_select())
            .load(&mut conn)
            .await?;
        tracing::debug!(count = rows.len(), "Loaded applications");
        Ok(rows)
    }

    async fn list_applications_for_job(&self, job_id: &str) -> Result<Vec<Application>, StoreError> {
        let mut conn = self.pool.get().await?;
        let rows = applications::table
            .filter(applications::job_id.eq(job_id))
            .order(applications::applied_at.desc())
            .select(Application::as_select())
            .load(&mut conn)
            .await?;
        tracing::debug!(job_id, count = rows.len(), "Loaded applications for job");
        Ok(rows)
    }
}
