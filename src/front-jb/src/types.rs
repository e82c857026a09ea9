//! Wire types as the browser sees them. Ids and timestamps arrive as JSON strings;
//! ids stay opaque strings here since the frontend only ever echoes them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Remote,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [JobType::FullTime, JobType::PartTime, JobType::Remote, JobType::Contract];

    /// The wire value, also used as the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Remote => "remote",
            JobType::Contract => "contract",
        }
    }

    pub fn parse(raw: &str) -> Option<JobType> {
        JobType::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
    #[serde(rename = "appliedAt")]
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
}

/// An admin listing row: `job_id` is replaced by the job's summary, or `null`
/// when the job no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationWithJob {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_id: Option<JobSummary>,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
    #[serde(rename = "appliedAt")]
    pub applied_at: DateTime<Utc>,
}

/// Body of `POST /applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub application: Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
