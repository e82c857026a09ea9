//! Request-independent business operations over a [`JobBoardStore`].
//!
//! Route handlers only extract inputs and pick status codes; everything else lives here.
//!
//! [`JobBoardStore`]: data_model_jb::store::JobBoardStore

use data_model_jb::errors::ApiError;
use data_model_jb::store::StoreError;

pub mod applications;
pub mod jobs;

/// Logs a store failure for `operation` and turns it into a 500.
fn store_failure(operation: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |error| {
        tracing::error!(operation, error = %error, "store operation failed");
        error.into()
    }
}
