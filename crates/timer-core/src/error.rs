//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Session not found or inactive")]
    SessionNotFound,

    #[error("Upstream rejected request with status {status}")]
    UpstreamRejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
