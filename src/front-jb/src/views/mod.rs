//! Per-page view state. Views hold no DOM handles: the glue in `lib.rs` feeds them
//! user events and fetch results, then re-renders from their state.

pub mod admin;
pub mod application_form;
pub mod fetch;
pub mod home;
pub mod job_detail;

pub use admin::AdminView;
pub use application_form::{ApplicationFormView, FormField, SubmitOutcome};
pub use fetch::{FetchSequencer, LoadState, Ticket};
pub use home::HomeView;
pub use job_detail::{DetailState, JobDetailView};
