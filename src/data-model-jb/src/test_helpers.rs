//! Test utilities: an empty in-memory store plus fixtures for jobs and applications.
//!
//! Everything here goes through the [`JobBoardStore`] trait, so tests never need a
//! running database.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Application, ApplicationPayload, Job, JobPayload, JobType, NewApplication, NewJob};
use crate::store::{JobBoardStore, MemoryStore, SharedStore};

/// A fresh, empty in-memory store.
pub fn test_store() -> SharedStore {
    Arc::new(MemoryStore::new())
}

/// A complete, valid job payload of the given type.
pub fn job_payload(title: &str, job_type: JobType) -> JobPayload {
    JobPayload {
        title: Some(title.to_string()),
        company: Some("TechCorp Solutions".to_string()),
        location: Some("San Francisco, CA".to_string()),
        description: Some(format!("We are hiring a {}.", title)),
        requirements: Some("3+ years of experience".to_string()),
        job_type: Some(job_type.as_str().to_string()),
        salary: Some("$80,000 - $120,000".to_string()),
    }
}

/// A complete, valid application payload for `job_id`.
pub fn application_payload(job_id: &str, name: &str) -> ApplicationPayload {
    ApplicationPayload {
        job_id: Some(job_id.to_string()),
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        resume_link: Some("https://example.com/resume.pdf".to_string()),
        cover_letter: Some(
            "I have followed your company for years and would love to contribute to the team.".to_string(),
        ),
    }
}

/// Inserts a job with the given creation time directly into the store.
pub async fn create_test_job_at(
    store: &dyn JobBoardStore,
    title: &str,
    job_type: JobType,
    created_at: DateTime<Utc>,
) -> Job {
    let job = NewJob {
        title: title.to_string(),
        company: "TechCorp Solutions".to_string(),
        location: "San Francisco, CA".to_string(),
        description: format!("We are hiring a {}.", title),
        requirements: "3+ years of experience".to_string(),
        job_type,
        salary: "Competitive".to_string(),
    }
    .into_job(Uuid::new_v4(), created_at);
    store.insert_job(job).await.expect("Failed to insert test job")
}

pub async fn create_test_job(store: &dyn JobBoardStore, title: &str, job_type: JobType) -> Job {
    create_test_job_at(store, title, job_type, Utc::now()).await
}

/// Inserts an application with the given submission time directly into the store.
pub async fn create_test_application_at(
    store: &dyn JobBoardStore,
    job_id: &str,
    name: &str,
    applied_at: DateTime<Utc>,
) -> Application {
    let application = NewApplication {
        job_id: job_id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        resume_link: "https://example.com/resume.pdf".to_string(),
        cover_letter: "c".repeat(60),
    }
    .into_application(Uuid::new_v4(), applied_at);
    store
        .insert_application(application)
        .await
        .expect("Failed to insert test application")
}
