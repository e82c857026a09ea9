use crate::client::ClientError;
use crate::types::{Job, JobType};

use super::fetch::{FetchSequencer, LoadState, Ticket};

pub const FETCH_FAILED: &str = "Failed to fetch jobs";
pub const NO_JOBS: &str = "No jobs found matching your criteria.";

/// Job list with a single-select employment type filter.
#[derive(Debug)]
pub struct HomeView {
    filter: Option<JobType>,
    state: LoadState<Vec<Job>>,
    sequencer: FetchSequencer,
}

impl Default for HomeView {
    fn default() -> Self {
        HomeView {
            filter: None,
            state: LoadState::Loading,
            sequencer: FetchSequencer::default(),
        }
    }
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> Option<JobType> {
        self.filter
    }

    pub fn state(&self) -> &LoadState<Vec<Job>> {
        &self.state
    }

    /// Jobs currently shown; zero while loading or failed.
    pub fn job_count(&self) -> usize {
        match &self.state {
            LoadState::Loaded(jobs) => jobs.len(),
            _ => 0,
        }
    }

    /// Handles a click on a filter button (`None` is "All Jobs"). Clicking the
    /// active type clears the filter. Returns a ticket when the list must be refetched.
    pub fn select_filter(&mut self, selected: Option<JobType>) -> Option<Ticket> {
        let next = if self.filter == selected { None } else { selected };
        if next == self.filter {
            return None;
        }
        self.filter = next;
        Some(self.begin_fetch())
    }

    /// Starts a fetch for the current filter. Also used for the initial load and retry.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.state = LoadState::Loading;
        self.sequencer.issue()
    }

    /// Applies a fetch result. Returns false, leaving the view untouched, when the
    /// result belongs to a superseded fetch.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Vec<Job>, ClientError>) -> bool {
        if !self.sequencer.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(jobs) => LoadState::Loaded(jobs),
            Err(_) => LoadState::Failed(FETCH_FAILED.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn job(id: &str, job_type: JobType) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "Build things".to_string(),
            requirements: String::new(),
            job_type,
            salary: "Competitive".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_toggles() {
        let mut view = HomeView::new();
        view.begin_fetch();

        assert!(view.select_filter(Some(JobType::Remote)).is_some());
        assert_eq!(view.filter(), Some(JobType::Remote));

        // Re-selecting the active type clears it.
        assert!(view.select_filter(Some(JobType::Remote)).is_some());
        assert_eq!(view.filter(), None);

        // "All" while already showing all is a no-op.
        assert!(view.select_filter(None).is_none());

        view.select_filter(Some(JobType::Contract));
        assert!(view.select_filter(Some(JobType::PartTime)).is_some());
        assert_eq!(view.filter(), Some(JobType::PartTime));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut view = HomeView::new();
        let all = view.begin_fetch();
        let remote = view.select_filter(Some(JobType::Remote)).unwrap();

        assert!(view.finish_fetch(remote, Ok(vec![job("r", JobType::Remote)])));
        // The slower unfiltered response arrives last and must not win.
        assert!(!view.finish_fetch(all, Ok(vec![job("a", JobType::FullTime), job("b", JobType::Contract)])));

        match view.state() {
            LoadState::Loaded(jobs) => {
                assert_eq!(jobs.len(), 1);
                assert_eq!(jobs[0].job_type, JobType::Remote);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_failure_then_retry() {
        let mut view = HomeView::new();
        let ticket = view.begin_fetch();
        assert!(view.finish_fetch(ticket, Err(ClientError::Network)));
        assert_eq!(view.state(), &LoadState::Failed(FETCH_FAILED.to_string()));
        assert_eq!(view.job_count(), 0);

        let retry = view.begin_fetch();
        assert_eq!(view.state(), &LoadState::Loading);
        assert!(view.finish_fetch(retry, Ok(vec![job("a", JobType::FullTime)])));
        assert_eq!(view.job_count(), 1);
    }
}
