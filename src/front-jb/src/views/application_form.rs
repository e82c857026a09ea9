//! Application form: field state, client-side validation and the submit lifecycle.
//!
//! Validation runs entirely in the browser before anything is sent. The server
//! repeats its own required-field checks.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::client::ClientError;
use crate::types::{Job, NewApplication, SubmitResponse};

use super::fetch::{FetchSequencer, Ticket};
use super::job_detail::DetailState;

pub const MIN_COVER_LETTER_CHARS: usize = 50;

pub const SUBMIT_SUCCEEDED: &str = "Application submitted successfully!";
pub const SUBMIT_FAILED: &str = "Failed to submit application. Please try again.";

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));
static RESUME_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://.+").expect("url pattern compiles"));

/// True for links starting with `http://` or `https://` plus at least one character.
pub fn is_resume_url(link: &str) -> bool {
    RESUME_URL.is_match(link)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    ResumeLink,
    CoverLetter,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::ResumeLink,
        FormField::CoverLetter,
    ];

    /// Input name, matching the JSON field it is submitted as.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::ResumeLink => "resume_link",
            FormField::CoverLetter => "cover_letter",
        }
    }

    pub fn parse(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub cover_letter: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::ResumeLink => &self.resume_link,
            FormField::CoverLetter => &self.cover_letter,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::ResumeLink => &mut self.resume_link,
            FormField::CoverLetter => &mut self.cover_letter,
        }
    }

    /// One message per invalid field; empty when the form may be submitted.
    pub fn validate(&self) -> BTreeMap<FormField, &'static str> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !EMAIL.is_match(&self.email) {
            errors.insert(FormField::Email, "Please enter a valid email address");
        }

        if self.resume_link.trim().is_empty() {
            errors.insert(FormField::ResumeLink, "Resume link is required");
        } else if !is_resume_url(&self.resume_link) {
            errors.insert(FormField::ResumeLink, "Please enter a valid URL");
        }

        if self.cover_letter.trim().is_empty() {
            errors.insert(FormField::CoverLetter, "Cover letter is required");
        } else if self.cover_letter.chars().count() < MIN_COVER_LETTER_CHARS {
            errors.insert(FormField::CoverLetter, "Cover letter must be at least 50 characters");
        }

        errors
    }
}

/// What the page should do once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirm, then go back to the job list.
    Submitted,
    /// Tell the user; the entered values stay in place.
    Failed,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Submitted => SUBMIT_SUCCEEDED,
            SubmitOutcome::Failed => SUBMIT_FAILED,
        }
    }
}

#[derive(Debug)]
pub struct ApplicationFormView {
    job_id: String,
    job: DetailState,
    fields: FormFields,
    errors: BTreeMap<FormField, &'static str>,
    submitting: bool,
    sequencer: FetchSequencer,
}

impl ApplicationFormView {
    pub fn new(job_id: impl Into<String>) -> Self {
        ApplicationFormView {
            job_id: job_id.into(),
            job: DetailState::Loading,
            fields: FormFields::default(),
            errors: BTreeMap::new(),
            submitting: false,
            sequencer: FetchSequencer::default(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn job(&self) -> &DetailState {
        &self.job
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Starts loading the job shown above the form.
    pub fn begin_load(&mut self) -> Ticket {
        self.job = DetailState::Loading;
        self.sequencer.issue()
    }

    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Job, ClientError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        // Any failure leaves nothing to apply to.
        self.job = match result {
            Ok(job) => DetailState::Loaded(job),
            Err(_) => DetailState::NotFound,
        };
        true
    }

    /// Records an edit. Returns true if this cleared an error on the field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        *self.fields.slot(field) = value.into();
        self.errors.remove(&field).is_some()
    }

    /// Validates and, if the form is clean, marks it in flight and returns the
    /// request to send. Returns `None` when nothing should be sent: a submission is
    /// already in flight, the job has not loaded, or validation failed.
    pub fn try_submit(&mut self) -> Option<NewApplication> {
        if self.submitting || !matches!(self.job, DetailState::Loaded(_)) {
            return None;
        }

        self.errors = self.fields.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        Some(NewApplication {
            job_id: self.job_id.clone(),
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            resume_link: self.fields.resume_link.clone(),
            cover_letter: self.fields.cover_letter.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<SubmitResponse, ClientError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(_) => SubmitOutcome::Submitted,
            Err(_) => SubmitOutcome::Failed,
        }
    }
}
