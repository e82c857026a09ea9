use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::client::ClientError;
use crate::types::ApplicationWithJob;

use super::fetch::{FetchSequencer, LoadState, Ticket};

pub const FETCH_FAILED: &str = "Failed to fetch applications";
pub const NO_APPLICATIONS: &str = "No applications submitted yet.";
pub const JOB_UNAVAILABLE: &str = "Job no longer available";

/// Cover letters longer than this are cut in the table until expanded.
pub const PREVIEW_CHARS: usize = 100;

/// Submitted applications, each with the job it was for.
#[derive(Debug)]
pub struct AdminView {
    state: LoadState<Vec<ApplicationWithJob>>,
    expanded: HashSet<String>,
    sequencer: FetchSequencer,
}

impl Default for AdminView {
    fn default() -> Self {
        AdminView {
            state: LoadState::Loading,
            expanded: HashSet::new(),
            sequencer: FetchSequencer::default(),
        }
    }
}

impl AdminView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<ApplicationWithJob>> {
        &self.state
    }

    pub fn total(&self) -> usize {
        match &self.state {
            LoadState::Loaded(applications) => applications.len(),
            _ => 0,
        }
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.state = LoadState::Loading;
        self.sequencer.issue()
    }

    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Vec<ApplicationWithJob>, ClientError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(applications) => LoadState::Loaded(applications),
            Err(_) => LoadState::Failed(FETCH_FAILED.to_string()),
        };
        true
    }

    /// Expands or collapses one application's cover letter.
    pub fn toggle_expanded(&mut self, application_id: &str) {
        if !self.expanded.remove(application_id) {
            self.expanded.insert(application_id.to_string());
        }
    }

    pub fn is_expanded(&self, application_id: &str) -> bool {
        self.expanded.contains(application_id)
    }
}

/// The cover letter as shown in the table, and whether it was cut short.
pub fn cover_letter_preview(cover_letter: &str, expanded: bool) -> (String, bool) {
    if expanded || cover_letter.chars().count() <= PREVIEW_CHARS {
        return (cover_letter.to_string(), false);
    }
    let preview: String = cover_letter.chars().take(PREVIEW_CHARS).collect();
    (format!("{}…", preview.trim_end()), true)
}

/// Title and company for the position column.
pub fn position(application: &ApplicationWithJob) -> (&str, &str) {
    match &application.job_id {
        Some(job) => (&job.title, &job.company),
        None => (JOB_UNAVAILABLE, ""),
    }
}

/// e.g. `May 1, 2024, 12:30 PM`
pub fn format_applied_at(applied_at: &DateTime<Utc>) -> String {
    applied_at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::types::JobSummary;

    fn row(id: &str, job: Option<JobSummary>, cover_letter: &str) -> ApplicationWithJob {
        ApplicationWithJob {
            id: id.to_string(),
            job_id: job,
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            resume_link: "https://example.com/grace.pdf".to_string(),
            cover_letter: cover_letter.to_string(),
            applied_at: Utc::now(),
        }
    }

    #[test]
    fn test_preview_truncation() {
        let short = "a".repeat(PREVIEW_CHARS);
        assert_eq!(cover_letter_preview(&short, false), (short.clone(), false));

        let long = "b".repeat(PREVIEW_CHARS + 1);
        let (preview, truncated) = cover_letter_preview(&long, false);
        assert!(truncated);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));

        assert_eq!(cover_letter_preview(&long, true), (long.clone(), false));
    }

    #[test]
    fn test_toggle_expanded() {
        let mut view = AdminView::new();
        view.toggle_expanded("a1");
        assert!(view.is_expanded("a1"));
        assert!(!view.is_expanded("a2"));
        view.toggle_expanded("a1");
        assert!(!view.is_expanded("a1"));
    }

    #[test]
    fn test_position_placeholder() {
        let summary = JobSummary {
            id: "j1".to_string(),
            title: "Backend Developer".to_string(),
            company: "DataFlow".to_string(),
        };
        assert_eq!(position(&row("a1", Some(summary), "hi")), ("Backend Developer", "DataFlow"));
        assert_eq!(position(&row("a2", None, "hi")), (JOB_UNAVAILABLE, ""));
    }

    #[test]
    fn test_total_and_failure() {
        let mut view = AdminView::new();
        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Ok(vec![row("a1", None, "x"), row("a2", None, "y")]));
        assert_eq!(view.total(), 2);

        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(ClientError::Server(500)));
        assert_eq!(view.state(), &LoadState::Failed(FETCH_FAILED.to_string()));
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn test_format_applied_at() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(format_applied_at(&at), "May 1, 2024, 12:30 PM");
        let at = Utc.with_ymd_and_hms(2024, 11, 23, 9, 5, 0).unwrap();
        assert_eq!(format_applied_at(&at), "Nov 23, 2024, 09:05 AM");
    }
}
