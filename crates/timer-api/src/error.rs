use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use timer_core::error::DomainError;

use crate::response::{ErrorResponse, ExtendResponse};

const DEFAULT_UPSTREAM_MESSAGE: &str = "Failed to extend session";
const NOT_FOUND_MESSAGE: &str = "Invalid or expired session";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    /// `message` goes to the client, `detail` only to the log.
    #[error("Internal error: {detail}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    /// Maps a domain failure; anything unexpected becomes a 500 carrying
    /// `internal_message`.
    pub fn from_domain(error: DomainError, internal_message: &str) -> Self {
        match error {
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::SessionNotFound => ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            DomainError::UpstreamRejected { status, message } => ApiError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message: message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_UPSTREAM_MESSAGE.to_string()),
            },
            other => ApiError::Internal {
                message: internal_message.to_string(),
                detail: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the failure and returns the client-facing text.
    fn into_public_message(self) -> String {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                msg
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                msg
            }
            ApiError::Upstream { status, message } => {
                tracing::warn!("Upstream error {}: {}", status, message);
                message
            }
            ApiError::Internal { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                message
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.into_public_message(),
        });

        (status, body).into_response()
    }
}

/// Same failures rendered in the `{success: false, error}` extend envelope.
#[derive(Debug)]
pub struct ExtendError(pub ApiError);

impl From<ApiError> for ExtendError {
    fn from(error: ApiError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ExtendError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = Json(ExtendResponse::failure(self.0.into_public_message()));

        (status, body).into_response()
    }
}
