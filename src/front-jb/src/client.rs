//! HTTP client for the job board API.
//!
//! Every failure is folded into a [`ClientError`] whose `Display` is the message
//! shown to the user.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::types::{ApplicationWithJob, ErrorBody, Job, JobType, NewApplication, SubmitResponse};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API address used while developing against a local server.
pub const LOCAL_API_URL: &str = "http://localhost:5000/api";

/// API address baked in at build time, if any.
const CONFIGURED_API_URL: Option<&str> = option_env!("JOBBOARD_API_URL");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Request timeout - please check your connection")]
    Timeout,
    #[error("Server error - please try again later")]
    Server(u16),
    #[error("Resource not found")]
    NotFound,
    #[error("Network error - please check your connection")]
    Network,
    /// Any other non-2xx status, with the server's `error` message.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ClientError {
    /// Classifies a non-2xx response.
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        match status {
            500.. => ClientError::Server(status),
            404 => ClientError::NotFound,
            _ => ClientError::Http {
                status,
                message: body
                    .map(|b| b.error)
                    .unwrap_or_else(|| format!("Request failed with status code {}", status)),
            },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ClientError::Timeout
        } else if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            ClientError::from_status(status.as_u16(), None)
        } else {
            ClientError::Network
        }
    }
}

/// Picks the API base address for a page served from `hostname`/`origin`.
pub fn resolve_api_base_url(hostname: &str, configured: Option<&str>, origin: &str) -> String {
    if hostname == "localhost" {
        return LOCAL_API_URL.to_string();
    }
    match configured.filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}/api", origin.trim_end_matches('/')),
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Client for the page's own deployment, see [`resolve_api_base_url`].
    pub fn for_page(hostname: &str, origin: &str) -> Self {
        ApiClient::new(resolve_api_base_url(hostname, CONFIGURED_API_URL, origin))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.ok();
            return Err(ClientError::from_status(status.as_u16(), body));
        }

        Ok(response.json::<T>().await?)
    }

    /// GET /jobs, optionally restricted to one employment type.
    pub async fn get_jobs(&self, job_type: Option<JobType>) -> Result<Vec<Job>, ClientError> {
        // Type names are plain ASCII, no escaping needed.
        let path = match job_type {
            Some(job_type) => format!("/jobs?type={}", job_type.as_str()),
            None => "/jobs".to_string(),
        };
        self.send(self.http.get(self.url(&path))).await
    }

    pub async fn get_job(&self, id: &str) -> Result<Job, ClientError> {
        self.send(self.http.get(self.url(&format!("/jobs/{}", id)))).await
    }

    pub async fn submit_application(&self, application: &NewApplication) -> Result<SubmitResponse, ClientError> {
        self.send(self.http.post(self.url("/applications")).json(application))
            .await
    }

    /// GET /applications: every application joined with its job summary.
    pub async fn get_applications(&self) -> Result<Vec<ApplicationWithJob>, ClientError> {
        self.send(self.http.get(self.url("/applications"))).await
    }
}
