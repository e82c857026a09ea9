use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error for every /api endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed input: 400
    #[error("{0}")]
    Validation(String),
    /// Unknown id: 404
    #[error("{0}")]
    NotFound(String),
    /// Known path, unsupported method: 405
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Any persistence failure: 500
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

macro_rules! from_error {
    ($lib_err:path, $variant:ident) => {
        /// Converts a `$lib_err` into an `ApiError::$variant` carrying its message.
        impl From<$lib_err> for ApiError {
            fn from(e: $lib_err) -> Self {
                ApiError::$variant(e.to_string())
            }
        }
    };
}

from_error!(StoreError, Store);
from_error!(ValidationError, Validation);
from_error!(JsonRejection, Validation);
from_error!(QueryRejection, Validation);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed("x".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Store("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_keeps_message() {
        let error: ApiError = StoreError::Pool("timed out".to_string()).into();
        assert!(matches!(error, ApiError::Store(ref m) if m == "Database pool error: timed out"));
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let error: ApiError = ValidationError {
            model: "Job",
            issues: vec!["title: Path `title` is required.".to_string()],
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Job validation failed: title: Path `title` is required."
        );
    }
}
