//! HTML for each page, built as strings and swapped into the app root.
//!
//! Interactive elements carry `data-action` (clicks) or `data-field` (form input)
//! attributes, which the delegated listeners in `lib.rs` dispatch on.

use crate::router::Route;
use crate::types::{Job, JobType};
use crate::views::admin::{self, AdminView};
use crate::views::application_form::{ApplicationFormView, FormField, MIN_COVER_LETTER_CHARS, is_resume_url};
use crate::views::home::{self, HomeView};
use crate::views::job_detail::{DetailState, JOB_NOT_FOUND, JobDetailView};
use crate::views::LoadState;

/// Element id of the cover letter character counter.
pub const COVER_LETTER_COUNT_ID: &str = "cover-letter-count";
pub const APPLICATION_FORM_ID: &str = "application-form";

/// A click on a `data-action` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Home filter button; `None` is "All Jobs".
    Filter(Option<JobType>),
    Retry,
    ToggleCoverLetter(String),
}

impl Action {
    pub fn parse(action: &str, value: Option<&str>) -> Option<Action> {
        match (action, value) {
            ("filter", None | Some("")) => Some(Action::Filter(None)),
            ("filter", Some(raw)) => JobType::parse(raw).map(|t| Action::Filter(Some(t))),
            ("retry", _) => Some(Action::Retry),
            ("toggle-cover-letter", Some(id)) if !id.is_empty() => Some(Action::ToggleCoverLetter(id.to_string())),
            _ => None,
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Element id of the error message under `field`.
pub fn field_error_id(field: FormField) -> String {
    format!("{}-error", field.name())
}

pub fn cover_letter_count(count: usize) -> String {
    format!("{}/{} characters minimum", count, MIN_COVER_LETTER_CHARS)
}

pub fn nav() -> String {
    format!(
        r#"<nav class="nav"><a class="brand" href="{}">Job Board</a><a href="{}">Jobs</a><a href="{}">Admin</a></nav>"#,
        Route::Home.href(),
        Route::Home.href(),
        Route::Admin.href()
    )
}

fn loading(message: &str) -> String {
    format!(
        r#"<div class="loading"><div class="spinner"></div><p>{}</p></div>"#,
        escape_html(message)
    )
}

/// Error state of a list view, with a retry button.
fn fetch_failed(message: &str) -> String {
    format!(
        r#"<div class="error"><p>{}</p><button data-action="retry">Try Again</button></div>"#,
        escape_html(message)
    )
}

fn type_badge(job_type: JobType) -> String {
    format!(
        r#"<span class="badge badge-{0}">{0}</span>"#,
        job_type.as_str()
    )
}

fn back_to_jobs() -> String {
    format!(r#"<a class="btn-secondary" href="{}">Back to Jobs</a>"#, Route::Home.href())
}

//
// Home
//

fn filter_button(label: &str, value: &str, active: bool) -> String {
    format!(
        r#"<button class="filter{}" data-action="filter" data-value="{}">{}</button>"#,
        if active { " active" } else { "" },
        value,
        escape_html(label)
    )
}

fn job_card(job: &Job) -> String {
    let mut html = String::from(r#"<div class="card job-card">"#);
    html.push_str(&format!(
        r#"<div class="card-header"><h3>{}</h3>{}</div>"#,
        escape_html(&job.title),
        type_badge(job.job_type)
    ));
    html.push_str(&format!(r#"<p class="company">{}</p>"#, escape_html(&job.company)));
    html.push_str(&format!(r#"<p class="location">{}</p>"#, escape_html(&job.location)));
    html.push_str(&format!(r#"<p class="description">{}</p>"#, escape_html(&job.description)));
    html.push_str(&format!(r#"<p class="salary">{}</p>"#, escape_html(&job.salary)));
    html.push_str(&format!(
        r#"<a class="btn-primary" href="{}">View Details</a>"#,
        Route::JobDetail(job.id.clone()).href()
    ));
    html.push_str("</div>");
    html
}

pub fn home_page(view: &HomeView) -> String {
    let mut html = String::from(r#"<div class="home">"#);
    html.push_str("<h1>Find Your Dream Job</h1>");

    html.push_str(r#"<div class="filters">"#);
    html.push_str(&filter_button(
        &format!("All Jobs ({})", view.job_count()),
        "",
        view.filter().is_none(),
    ));
    for job_type in JobType::ALL {
        html.push_str(&filter_button(
            job_type.as_str(),
            job_type.as_str(),
            view.filter() == Some(job_type),
        ));
    }
    html.push_str("</div>");

    match view.state() {
        LoadState::Loading => html.push_str(&loading("Loading amazing opportunities...")),
        LoadState::Failed(message) => html.push_str(&fetch_failed(message)),
        LoadState::Loaded(jobs) if jobs.is_empty() => {
            html.push_str(&format!(r#"<p class="empty">{}</p>"#, home::NO_JOBS));
        }
        LoadState::Loaded(jobs) => {
            html.push_str(r#"<div class="jobs-grid">"#);
            for job in jobs {
                html.push_str(&job_card(job));
            }
            html.push_str("</div>");
        }
    }

    html.push_str("</div>");
    html
}

//
// Job detail
//

pub fn job_detail_page(view: &JobDetailView) -> String {
    let job = match view.state() {
        DetailState::Loading => return loading("Loading job details..."),
        DetailState::NotFound => return not_found_message(JOB_NOT_FOUND),
        DetailState::Failed(message) => return not_found_message(message),
        DetailState::Loaded(job) => job,
    };

    let mut html = String::from(r#"<div class="card job-detail">"#);
    html.push_str(&format!(
        r#"<div class="card-header"><div><h1>{}</h1><p class="company">{}</p><p class="location">{}</p></div>{}</div>"#,
        escape_html(&job.title),
        escape_html(&job.company),
        escape_html(&job.location),
        type_badge(job.job_type)
    ));
    html.push_str(&format!(
        r#"<h2>Job Description</h2><div class="prose">{}</div>"#,
        escape_html(&job.description)
    ));
    html.push_str(&format!(
        r#"<h3>Requirements</h3><div class="prose">{}</div>"#,
        escape_html(&job.requirements)
    ));
    html.push_str(&format!(
        r#"<h3>Salary</h3><div class="salary"><p>{}</p></div>"#,
        escape_html(&job.salary)
    ));
    html.push_str(&format!(
        r#"<div class="actions"><a class="btn-primary" href="{}">Apply Now</a>{}</div>"#,
        Route::Apply(job.id.clone()).href(),
        back_to_jobs()
    ));
    html.push_str("</div>");
    html
}

fn not_found_message(message: &str) -> String {
    format!(
        r#"<div class="error"><p>{}</p>{}</div>"#,
        escape_html(message),
        back_to_jobs()
    )
}

//
// Application form
//

fn form_input(view: &ApplicationFormView, field: FormField, label: &str, kind: &str, placeholder: &str) -> String {
    let value = escape_html(view.fields().get(field));
    let control = match kind {
        "textarea" => format!(
            r#"<textarea id="{0}" name="{0}" data-field="{0}" rows="8" placeholder="{1}">{2}</textarea>"#,
            field.name(),
            escape_html(placeholder),
            value
        ),
        _ => format!(
            r#"<input type="{0}" id="{1}" name="{1}" data-field="{1}" placeholder="{2}" value="{3}">"#,
            kind,
            field.name(),
            escape_html(placeholder),
            value
        ),
    };

    let mut html = format!(
        r#"<div class="form-group{}"><label for="{}">{} *</label>{}"#,
        if view.error(field).is_some() { " has-error" } else { "" },
        field.name(),
        label,
        control
    );
    html.push_str(&format!(
        r#"<p class="field-error" id="{}">{}</p>"#,
        field_error_id(field),
        view.error(field).unwrap_or_default()
    ));
    html.push_str("</div>");
    html
}

pub fn application_form_page(view: &ApplicationFormView) -> String {
    let job = match view.job() {
        DetailState::Loading => return loading("Loading job details..."),
        DetailState::Loaded(job) => job,
        DetailState::NotFound | DetailState::Failed(_) => return not_found_message(JOB_NOT_FOUND),
    };

    let mut html = String::from(r#"<div class="card application-form">"#);
    html.push_str("<h1>Apply for Position</h1>");
    html.push_str(&format!(
        r#"<div class="job-context"><h2>{}</h2><p>{} • {}</p></div>"#,
        escape_html(&job.title),
        escape_html(&job.company),
        escape_html(&job.location)
    ));

    html.push_str(&format!(r#"<form id="{}" novalidate>"#, APPLICATION_FORM_ID));
    html.push_str(&form_input(view, FormField::Name, "Full Name", "text", "Enter your full name"));
    html.push_str(&form_input(view, FormField::Email, "Email Address", "email", "Enter your email address"));
    html.push_str(&form_input(
        view,
        FormField::ResumeLink,
        "Resume Link",
        "url",
        "https://example.com/your-resume.pdf",
    ));
    html.push_str(&form_input(
        view,
        FormField::CoverLetter,
        "Cover Letter",
        "textarea",
        "Write your cover letter here (minimum 50 characters)...",
    ));
    html.push_str(&format!(
        r#"<p class="hint" id="{}">{}</p>"#,
        COVER_LETTER_COUNT_ID,
        cover_letter_count(view.fields().cover_letter.chars().count())
    ));

    html.push_str(&format!(
        r#"<div class="actions"><button type="submit" class="btn-primary"{}>{}</button><a class="btn-secondary" href="{}">Cancel</a></div>"#,
        if view.is_submitting() { " disabled" } else { "" },
        if view.is_submitting() { "Submitting..." } else { "Submit Application" },
        Route::JobDetail(view.job_id().to_string()).href()
    ));
    html.push_str("</form></div>");
    html
}

//
// Admin
//

pub fn admin_page(view: &AdminView) -> String {
    let applications = match view.state() {
        LoadState::Loading => return loading("Loading applications..."),
        LoadState::Failed(message) => return fetch_failed(message),
        LoadState::Loaded(applications) => applications,
    };

    let total = format!("Total Applications: {}", view.total());
    let mut html = String::from(r#"<div class="admin">"#);
    html.push_str("<h1>Job Applications</h1>");
    html.push_str(&format!(r#"<div class="total">{}</div>"#, total));

    if applications.is_empty() {
        html.push_str(&format!(r#"<p class="empty">{}</p></div>"#, admin::NO_APPLICATIONS));
        return html;
    }

    html.push_str(
        "<table><thead><tr><th>Applicant</th><th>Position</th><th>Applied Date</th><th>Resume</th><th>Cover Letter</th></tr></thead><tbody>",
    );
    for application in applications {
        let (title, company) = admin::position(application);
        let expanded = view.is_expanded(&application.id);
        let (letter, truncated) = admin::cover_letter_preview(&application.cover_letter, expanded);

        html.push_str("<tr>");
        html.push_str(&format!(
            r#"<td><div class="name">{}</div><div class="muted">{}</div></td>"#,
            escape_html(&application.name),
            escape_html(&application.email)
        ));
        html.push_str(&format!(
            r#"<td class="{}"><div class="name">{}</div><div class="muted">{}</div></td>"#,
            if application.job_id.is_some() { "position" } else { "position unavailable" },
            escape_html(title),
            escape_html(company)
        ));
        html.push_str(&format!("<td>{}</td>", admin::format_applied_at(&application.applied_at)));
        html.push_str(&format!("<td>{}</td>", resume_cell(&application.resume_link)));
        html.push_str(&format!(r#"<td><p class="cover-letter">{}</p>"#, escape_html(&letter)));
        if truncated || expanded {
            html.push_str(&format!(
                r#"<button data-action="toggle-cover-letter" data-value="{}">{}</button>"#,
                escape_html(&application.id),
                if expanded { "Show Less" } else { "Read More" }
            ));
        }
        html.push_str("</td></tr>");
    }
    html.push_str("</tbody></table>");
    html.push_str(&format!(r#"<p class="total-footer">{}</p>"#, total));
    html.push_str("</div>");
    html
}

/// Only http(s) links become anchors; anything else is shown as text.
fn resume_cell(resume_link: &str) -> String {
    if is_resume_url(resume_link) {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">View Resume</a>"#,
            escape_html(resume_link)
        )
    } else {
        format!(r#"<span class="muted">{}</span>"#, escape_html(resume_link))
    }
}

pub fn not_found_page() -> String {
    not_found_message("Page not found")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{ApplicationWithJob, JobSummary};

    fn job(title: &str) -> Job {
        Job {
            id: "j1".to_string(),
            title: title.to_string(),
            company: "Acme & Sons".to_string(),
            location: "Berlin".to_string(),
            description: "Build <things>".to_string(),
            requirements: "Rust".to_string(),
            job_type: JobType::Remote,
            salary: "Competitive".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("filter", Some("")), Some(Action::Filter(None)));
        assert_eq!(
            Action::parse("filter", Some("part-time")),
            Some(Action::Filter(Some(JobType::PartTime)))
        );
        assert_eq!(Action::parse("filter", Some("intern")), None);
        assert_eq!(Action::parse("retry", None), Some(Action::Retry));
        assert_eq!(
            Action::parse("toggle-cover-letter", Some("a1")),
            Some(Action::ToggleCoverLetter("a1".to_string()))
        );
        assert_eq!(Action::parse("toggle-cover-letter", None), None);
        assert_eq!(Action::parse("delete", Some("a1")), None);
    }

    #[test]
    fn test_home_states() {
        let mut view = HomeView::new();
        let ticket = view.begin_fetch();
        assert!(home_page(&view).contains("Loading amazing opportunities..."));

        view.finish_fetch(ticket, Ok(vec![]));
        let html = home_page(&view);
        assert!(html.contains("No jobs found matching your criteria."));
        assert!(html.contains("All Jobs (0)"));

        let ticket = view.select_filter(Some(JobType::Remote)).unwrap();
        view.finish_fetch(ticket, Ok(vec![job("Rust <Dev>")]));
        let html = home_page(&view);
        assert!(html.contains("Rust &lt;Dev&gt;"));
        assert!(html.contains("Acme &amp; Sons"));
        assert!(html.contains(r##"href="#/jobs/j1""##));
        assert!(html.contains(r#"class="filter active" data-action="filter" data-value="remote""#));

        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(crate::ClientError::Network));
        let html = home_page(&view);
        assert!(html.contains("Failed to fetch jobs"));
        assert!(html.contains(r#"data-action="retry""#));
    }

    #[test]
    fn test_job_detail_links() {
        let mut view = JobDetailView::new("j1");
        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Ok(job("Backend")));
        let html = job_detail_page(&view);
        assert!(html.contains(r##"href="#/jobs/j1/apply""##));
        assert!(html.contains("Back to Jobs"));
        assert!(html.contains("Build &lt;things&gt;"));

        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(crate::ClientError::NotFound));
        assert!(job_detail_page(&view).contains("Job not found"));
    }

    #[test]
    fn test_form_shows_errors_and_values() {
        let mut view = ApplicationFormView::new("j1");
        let ticket = view.begin_load();
        view.finish_load(ticket, Ok(job("Backend")));
        view.set_field(FormField::Name, "Ada \"Countess\"");
        view.set_field(FormField::CoverLetter, "short");
        assert!(view.try_submit().is_none());

        let html = application_form_page(&view);
        assert!(html.contains(r#"value="Ada &quot;Countess&quot;""#));
        assert!(html.contains("Email is required"));
        assert!(html.contains("Cover letter must be at least 50 characters"));
        assert!(html.contains("5/50 characters minimum"));
        assert!(html.contains(r#"id="email-error""#));
        assert!(html.contains("Submit Application"));
    }

    fn admin_row(id: &str, resume_link: &str) -> ApplicationWithJob {
        ApplicationWithJob {
            id: id.to_string(),
            job_id: None,
            name: "Mallory".to_string(),
            email: "mallory@example.com".to_string(),
            resume_link: resume_link.to_string(),
            cover_letter: "Short letter".to_string(),
            applied_at: Utc::now(),
        }
    }

    #[test]
    fn test_admin_failure_offers_retry() {
        let mut view = AdminView::new();
        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(crate::ClientError::Network));

        let html = admin_page(&view);
        assert!(html.contains("Failed to fetch applications"));
        assert!(html.contains(r#"data-action="retry""#));
    }

    #[test]
    fn test_admin_only_links_http_resumes() {
        let mut view = AdminView::new();
        let ticket = view.begin_fetch();
        view.finish_fetch(
            ticket,
            Ok(vec![
                admin_row("a1", "javascript:alert(document.cookie)"),
                admin_row("a2", "https://example.com/cv.pdf"),
            ]),
        );

        let html = admin_page(&view);
        assert!(!html.contains(r#"href="javascript:"#));
        assert!(html.contains(r#"<span class="muted">javascript:alert(document.cookie)</span>"#));
        assert!(html.contains(r#"href="https://example.com/cv.pdf""#));
        assert_eq!(html.matches("View Resume").count(), 1);
    }

    #[test]
    fn test_admin_rows() {
        let mut view = AdminView::new();
        let ticket = view.begin_fetch();
        let long_letter = "word ".repeat(40);
        view.finish_fetch(
            ticket,
            Ok(vec![
                ApplicationWithJob {
                    id: "a1".to_string(),
                    job_id: Some(JobSummary {
                        id: "j1".to_string(),
                        title: "Backend".to_string(),
                        company: "Acme".to_string(),
                    }),
                    name: "Grace".to_string(),
                    email: "grace@example.com".to_string(),
                    resume_link: "https://example.com/g.pdf".to_string(),
                    cover_letter: long_letter.clone(),
                    applied_at: Utc::now(),
                },
                ApplicationWithJob {
                    id: "a2".to_string(),
                    job_id: None,
                    name: "Linus".to_string(),
                    email: "linus@example.com".to_string(),
                    resume_link: "https://example.com/l.pdf".to_string(),
                    cover_letter: "Short letter".to_string(),
                    applied_at: Utc::now(),
                },
            ]),
        );

        let html = admin_page(&view);
        assert_eq!(html.matches("Total Applications: 2").count(), 2);
        assert!(html.contains("Job no longer available"));
        assert!(html.contains("Read More"));
        assert_eq!(html.matches("toggle-cover-letter").count(), 1);
        assert!(!html.contains(long_letter.trim_end()));

        view.toggle_expanded("a1");
        let html = admin_page(&view);
        assert!(html.contains("Show Less"));
        assert!(html.contains(long_letter.trim_end()));
    }
}
