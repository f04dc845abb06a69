//! Centralized error handling.
//!
//! Every failure a submission can hit ends up as an [`ApiError`]; the
//! controllers turn it into a notification via [`ApiError::user_message`]
//! instead of propagating it further.

use thiserror::Error;

use crate::config::GENERIC_FAILURE_MESSAGE;

/// Client-side error taxonomy.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A local validation rule was violated; no network effect happened.
    #[error("{0}")]
    Validation(String),

    /// The backend rejected the request with a 4xx and a structured message.
    #[error("{message}")]
    ClientRequest { status: u16, message: String },

    /// The backend answered with a status the workflow does not expect.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// Network-level failure, 5xx, or a body that is not valid JSON.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Whether this is a 4xx rejection carrying a backend-provided message.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::ClientRequest { .. })
    }

    /// Message suitable for a user-facing notification.
    ///
    /// Backend-provided 4xx messages are surfaced verbatim; everything
    /// transport-shaped collapses to the generic failure message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::ClientRequest { message, .. } => message.clone(),
            ApiError::UnexpectedStatus(status) => {
                tracing::error!("unexpected backend status: {}", status);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            ApiError::Transport(detail) => {
                tracing::error!("transport failure: {}", detail);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience constructors
impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn client_request(status: u16, message: impl Into<String>) -> Self {
        ApiError::ClientRequest {
            status,
            message: message.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        ApiError::Transport(detail.into())
    }
}
