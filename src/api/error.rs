//! Error types for the REST service clients.

use thiserror::Error;

use super::HttpError;

/// Error type for backend service calls.
///
/// Covers transport failures, non-success responses, and payload
/// decoding problems. Callers decide recovery strategy; the payment
/// watcher, for example, treats every variant as transient.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-success status code.
    #[error("Server returned {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status {
        /// The HTTP status code.
        status: http::StatusCode,
        /// Detail message extracted from the response body, if any.
        detail: Option<String>,
    },

    /// The request or response body was not the expected JSON shape.
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured bearer token is not a valid header value.
    #[error("Invalid bearer token")]
    InvalidBearerToken,
}

impl ApiError {
    /// Maps the error to the message shown to console users.
    ///
    /// Transient backend problems are summarized rather than exposed;
    /// the full error stays available for logging via `Display`.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Http(HttpError::Timeout | HttpError::Connection(_)) => {
                "Unable to reach the service, please check your connection"
            }
            Self::Http(HttpError::InvalidUrl(_)) | Self::InvalidBearerToken => {
                "Service is misconfigured, please contact support"
            }
            Self::Status { status, .. } => match status.as_u16() {
                401 | 403 => "Authentication failed, please sign in again",
                404 => "The requested service endpoint does not exist",
                500.. => "The service hit an internal error, please try again later",
                _ => "The request was rejected, please try again later",
            },
            Self::Json(_) => "The service returned an unexpected response",
        }
    }
}
