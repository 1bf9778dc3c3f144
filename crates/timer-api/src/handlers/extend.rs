// ============================================================================
// Session Timer API - Extend Handler
// File: crates/timer-api/src/handlers/extend.rs
// ============================================================================
//! `POST /api/extend`: forwards a paid extension to the session service

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use timer_core::services::SessionService;

use crate::error::{ApiError, ExtendError};
use crate::response::ExtendResponse;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// The body is decoded by hand so an unparseable payload is an internal
/// error rather than an extractor rejection. Fields stay untyped until the
/// service judges them, so a wrong-typed falsy value is still a 400.
pub async fn extend_session(
    State(session_service): State<Arc<SessionService>>,
    body: Bytes,
) -> Result<Json<ExtendResponse>, ExtendError> {
    let request: Value = serde_json::from_slice(&body).map_err(|e| ApiError::Internal {
        message: INTERNAL_MESSAGE.to_string(),
        detail: format!("Malformed extend request: {}", e),
    })?;
    if request.is_null() {
        return Err(ApiError::Internal {
            message: INTERNAL_MESSAGE.to_string(),
            detail: "Extend request body is null".to_string(),
        }
        .into());
    }

    // Non-object bodies have no fields and fall through to the 400.
    let session_id = request.get("sessionId");
    let seconds = request.get("seconds");
    info!("Extend request for session {:?} ({:?}s)", session_id, seconds);

    let extended = session_service
        .extend(session_id, seconds)
        .await
        .map_err(|e| ApiError::from_domain(e, INTERNAL_MESSAGE))?;

    Ok(Json(ExtendResponse::success(extended.session)))
}
