//! Schema-level checks that turn raw request payloads into records ready to persist.
//!
//! Checks are structural only: required fields must be present and non-blank,
//! `type` must be one of the known employment types. Every failing field is
//! reported, not just the first one.

use crate::models::{ApplicationPayload, JobPayload, JobType, NewApplication, NewJob};

pub const DEFAULT_SALARY: &str = "Competitive";

/// One or more fields of a payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{model} validation failed: {}", .issues.join(", "))]
pub struct ValidationError {
    pub model: &'static str,
    pub issues: Vec<String>,
}

impl ValidationError {
    /// True if `path` is one of the failing fields.
    pub fn mentions(&self, path: &str) -> bool {
        let prefix = format!("{}: ", path);
        self.issues.iter().any(|issue| issue.starts_with(&prefix))
    }
}

struct Checker {
    model: &'static str,
    issues: Vec<String>,
}

impl Checker {
    fn new(model: &'static str) -> Self {
        Checker {
            model,
            issues: Vec::new(),
        }
    }

    /// Trims the value and records an issue if it is missing or blank.
    fn trimmed(&mut self, path: &str, value: Option<String>) -> String {
        let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
        self.require_non_blank(path, &value);
        value
    }

    /// Keeps the value verbatim and records an issue if it is missing or blank.
    fn verbatim(&mut self, path: &str, value: Option<String>) -> String {
        let value = value.unwrap_or_default();
        self.require_non_blank(path, &value);
        value
    }

    fn job_type(&mut self, value: Option<String>) -> Option<JobType> {
        match value.as_deref() {
            None | Some("") => {
                self.missing("type");
                None
            }
            Some(raw) => match raw.parse::<JobType>() {
                Ok(job_type) => Some(job_type),
                Err(e) => {
                    self.issues.push(format!("type: {}", e));
                    None
                }
            },
        }
    }

    fn require_non_blank(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.missing(path);
        }
    }

    fn missing(&mut self, path: &str) {
        self.issues.push(format!("{}: Path `{}` is required.", path, path));
    }

    fn into_error(self) -> ValidationError {
        ValidationError {
            model: self.model,
            issues: self.issues,
        }
    }
}

impl JobPayload {
    pub fn validate(self) -> Result<NewJob, ValidationError> {
        let mut checker = Checker::new("Job");
        let title = checker.trimmed("title", self.title);
        let company = checker.trimmed("company", self.company);
        let location = checker.trimmed("location", self.location);
        let description = checker.verbatim("description", self.description);
        let job_type = checker.job_type(self.job_type);

        match job_type {
            Some(job_type) if checker.issues.is_empty() => Ok(NewJob {
                title,
                company,
                location,
                description,
                requirements: self.requirements.unwrap_or_default(),
                job_type,
                salary: self.salary.unwrap_or_else(|| DEFAULT_SALARY.to_string()),
            }),
            _ => Err(checker.into_error()),
        }
    }
}

impl ApplicationPayload {
    pub fn validate(self) -> Result<NewApplication, ValidationError> {
        let mut checker = Checker::new("Application");
        let job_id = checker.trimmed("job_id", self.job_id);
        let name = checker.trimmed("name", self.name);
        let email = checker.trimmed("email", self.email).to_lowercase();
        let resume_link = checker.trimmed("resume_link", self.resume_link);
        let cover_letter = checker.verbatim("cover_letter", self.cover_letter);

        if !checker.issues.is_empty() {
            return Err(checker.into_error());
        }

        Ok(NewApplication {
            job_id,
            name,
            email,
            resume_link,
            cover_letter,
        })
    }
}
