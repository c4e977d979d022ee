//! Submission error types.

use thiserror::Error;

/// Errors from submitting to the external endpoints.
///
/// The storefront does not distinguish failure kinds to the user: any
/// transport failure or non-2xx status collapses into one banner message
/// and the form stays resubmittable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The payload failed boundary validation and was never sent.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The payload could not be serialized.
    #[error("JSON error: {0}")]
    Json(String),
}

impl ApiError {
    /// The uniform banner text shown for any submission failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidPayload(_) => "Please review the highlighted fields",
            _ => "Something went wrong. Please try again.",
        }
    }
}
