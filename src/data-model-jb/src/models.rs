use chrono::{DateTime, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::SqlType;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use uuid::Uuid;

// SQL type definition for the employment type enum
// Note: snake_case to match the PostgreSQL type name
#[allow(non_camel_case_types)]
#[derive(SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(postgres_type(name = "job_type"))]
pub struct Job_type;

/// Employment type of a posted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Job_type)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Remote,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [JobType::FullTime, JobType::PartTime, JobType::Remote, JobType::Contract];

    /// The wire literal, e.g. `full-time`.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Remote => "remote",
            JobType::Contract => "contract",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJobType(pub String);

impl std::fmt::Display for UnknownJobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` is not a valid enum value for path `type`.", self.0)
    }
}

impl std::error::Error for UnknownJobType {}

impl FromStr for JobType {
    type Err = UnknownJobType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownJobType(s.to_string()))
    }
}

impl ToSql<Job_type, Pg> for JobType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Job_type, Pg> for JobType {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"full-time" => Ok(JobType::FullTime),
            b"part-time" => Ok(JobType::PartTime),
            b"remote" => Ok(JobType::Remote),
            b"contract" => Ok(JobType::Contract),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

// jobs table model (database + wire representation)
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// applications table model (database + wire representation)
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Weak reference: never checked against the jobs table.
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
    #[serde(rename = "appliedAt")]
    pub applied_at: DateTime<Utc>,
}

/// Display-oriented subset of a [`Job`], joined onto applications at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
}

impl From<&Job> for JobSummary {
    fn from(job: &Job) -> Self {
        JobSummary {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
        }
    }
}

/// An [`Application`] whose `job_id` has been expanded into a [`JobSummary`].
/// `job_id` is `null` when the referenced job does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationWithJob {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub job_id: Option<JobSummary>,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
    #[serde(rename = "appliedAt")]
    pub applied_at: DateTime<Utc>,
}

impl ApplicationWithJob {
    pub fn join(application: Application, job: Option<JobSummary>) -> Self {
        ApplicationWithJob {
            id: application.id,
            job_id: job,
            name: application.name,
            email: application.email,
            resume_link: application.resume_link,
            cover_letter: application.cover_letter,
            applied_at: application.applied_at,
        }
    }
}

/// A validated job that has not been assigned an id or timestamp yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub job_type: JobType,
    pub salary: String,
}

impl NewJob {
    pub fn into_job(self, id: Uuid, created_at: DateTime<Utc>) -> Job {
        Job {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description,
            requirements: self.requirements,
            job_type: self.job_type,
            salary: self.salary,
            created_at,
        }
    }
}

/// A validated application that has not been assigned an id or timestamp yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
}

impl NewApplication {
    pub fn into_application(self, id: Uuid, applied_at: DateTime<Utc>) -> Application {
        Application {
            id,
            job_id: self.job_id,
            name: self.name,
            email: self.email,
            resume_link: self.resume_link,
            cover_letter: self.cover_letter,
            applied_at,
        }
    }
}

// API Payload Types

/// Input payload for POST /api/jobs. Every field is optional here so that
/// missing fields are reported by validation rather than by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPayload {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
}

/// Input payload for POST /api/applications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationPayload {
    pub job_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub resume_link: Option<String>,
    pub cover_letter: Option<String>,
}

/// Query string for GET /api/jobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsQuery {
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

/// Response payload for POST /api/applications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    pub message: String,
    pub application: Application,
}

pub const APPLICATION_SUBMITTED_MESSAGE: &str = "Application submitted successfully";
