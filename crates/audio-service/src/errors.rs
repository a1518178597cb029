//! Audio Token Service error types.
//!
//! `IssuanceError` is the typed failure returned by token construction and
//! carries no HTTP knowledge. `AudioError` is the request-boundary error; its
//! `IntoResponse` impl is the only place a status code is chosen.
//!
//! Every error body has the shape `{"error": "<description>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure while building, signing or verifying an access token.
#[derive(Debug, Error)]
pub enum IssuanceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid signing credentials: {0}")]
    InvalidCredentials(String),

    #[error("Metadata serialization failed: {0}")]
    Metadata(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

impl From<serde_json::Error> for IssuanceError {
    fn from(err: serde_json::Error) -> Self {
        IssuanceError::Metadata(err.to_string())
    }
}

/// Request-boundary error type.
///
/// Maps to HTTP status codes:
/// - Issuance(InvalidRequest), BadRequest: 400 Bad Request
/// - Issuance(anything else), Internal: 500 Internal Server Error
#[derive(Debug, Error)]
pub enum AudioError {
    #[error(transparent)]
    Issuance(#[from] IssuanceError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl AudioError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AudioError::Issuance(IssuanceError::InvalidRequest(_)) | AudioError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AudioError::Issuance(_) | AudioError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AudioError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(target: "audio.errors", error = %self, "Request failed");
        } else {
            tracing::debug!(target: "audio.errors", error = %self, "Request rejected");
        }

        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}
