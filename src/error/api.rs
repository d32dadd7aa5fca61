//! Errors raised while executing a backend call.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a single API call.
///
/// Transport failures are passed through untouched as [`ApiError::Http`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed before a response arrived.
    #[error("{0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The envelope carried a non-zero business code.
    #[error("Request rejected (code {code}): {message}")]
    Rejected { code: i64, message: String },
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Http(HttpError::InvalidUrl(_)) => ErrorCategory::Configuration,
            ApiError::Http(_) => ErrorCategory::Network,
            ApiError::Status { status, .. } => match *status {
                401 | 403 => ErrorCategory::Auth,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::User,
            },
            ApiError::Decode { .. } | ApiError::Encode(_) => ErrorCategory::Client,
            ApiError::Rejected { .. } => ErrorCategory::Server,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            ApiError::Rejected { .. } => false,
            other => other.category().is_retryable(),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Http(HttpError::ConnectionFailed(_)) => "API_CONNECTION_FAILED",
            ApiError::Http(HttpError::Timeout(_)) => "API_TIMEOUT",
            ApiError::Http(HttpError::InvalidUrl(_)) => "API_INVALID_URL",
            ApiError::Http(HttpError::Other(_)) => "API_TRANSPORT",
            ApiError::Status { .. } => "API_HTTP_STATUS",
            ApiError::Decode { .. } => "API_DECODE",
            ApiError::Encode(_) => "API_ENCODE",
            ApiError::Rejected { .. } => "API_REJECTED",
        }
    }
}
