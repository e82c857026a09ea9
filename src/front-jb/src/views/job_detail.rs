use crate::client::ClientError;
use crate::types::Job;

use super::fetch::{FetchSequencer, Ticket};

pub const FETCH_FAILED: &str = "Failed to fetch job details";
pub const JOB_NOT_FOUND: &str = "Job not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(Job),
    NotFound,
    Failed(String),
}

impl DetailState {
    fn from_result(result: Result<Job, ClientError>) -> Self {
        match result {
            Ok(job) => DetailState::Loaded(job),
            Err(ClientError::NotFound) => DetailState::NotFound,
            Err(_) => DetailState::Failed(FETCH_FAILED.to_string()),
        }
    }
}

/// One job, looked up by the id in the route.
#[derive(Debug)]
pub struct JobDetailView {
    job_id: String,
    state: DetailState,
    sequencer: FetchSequencer,
}

impl JobDetailView {
    pub fn new(job_id: impl Into<String>) -> Self {
        JobDetailView {
            job_id: job_id.into(),
            state: DetailState::Loading,
            sequencer: FetchSequencer::default(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn begin_fetch(&mut self) -> Ticket {
        self.state = DetailState::Loading;
        self.sequencer.issue()
    }

    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Job, ClientError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.state = DetailState::from_result(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_vs_failure() {
        let mut view = JobDetailView::new("42");
        let ticket = view.begin_fetch();
        assert!(view.finish_fetch(ticket, Err(ClientError::NotFound)));
        assert_eq!(view.state(), &DetailState::NotFound);

        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(ClientError::Timeout));
        assert_eq!(view.state(), &DetailState::Failed(FETCH_FAILED.to_string()));
    }

    #[test]
    fn test_superseded_fetch_ignored() {
        let mut view = JobDetailView::new("42");
        let old = view.begin_fetch();
        let _new = view.begin_fetch();
        assert!(!view.finish_fetch(old, Err(ClientError::NotFound)));
        assert_eq!(view.state(), &DetailState::Loading);
    }
}
