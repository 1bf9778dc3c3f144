//! `GET /api/validate?sessionId=`: checks the session store for an active row

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use timer_core::services::SessionService;

use crate::error::ApiError;
use crate::response::ValidateResponse;

const INTERNAL_MESSAGE: &str = "Failed to validate session";

/// Query pairs are kept raw so a repeated `sessionId` takes its first value
/// instead of failing deserialization.
pub async fn validate_session(
    State(session_service): State<Arc<SessionService>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let session_id = params
        .iter()
        .find(|(key, _)| key == "sessionId")
        .map(|(_, value)| value.as_str());

    session_service
        .validate(session_id)
        .await
        .map_err(|e| ApiError::from_domain(e, INTERNAL_MESSAGE))?;

    debug!("Session {:?} is active", session_id);
    Ok(Json(ValidateResponse { valid: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app, send, MockGateway, MockRepository};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use timer_core::domain::SessionRecord;
    use timer_core::error::DomainError;

    async fn get(repo: MockRepository, uri: &str) -> (StatusCode, serde_json::Value) {
        send(app(repo, MockGateway::new()), Method::GET, uri, None).await
    }

    #[tokio::test]
    async fn test_missing_session_id() {
        let mut repo = MockRepository::new();
        repo.expect_find_active().never();

        let (status, body) = get(repo, "/api/validate").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Session ID required"}));
    }

    #[tokio::test]
    async fn test_empty_session_id() {
        let mut repo = MockRepository::new();
        repo.expect_find_active().never();

        let (status, _) = get(repo, "/api/validate?sessionId=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_inactive_session_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_find_active().returning(|_| Ok(None));

        let (status, body) = get(repo, "/api/validate?sessionId=done").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Invalid or expired session"}));
    }

    #[tokio::test]
    async fn test_active_session_is_valid_and_repeatable() {
        let mut repo = MockRepository::new();
        repo.expect_find_active()
            .withf(|id| id == "live")
            .times(2)
            .returning(|id| {
                Ok(Some(SessionRecord {
                    session_id: id.to_string(),
                    is_active: true,
                }))
            });
        let app = app(repo, MockGateway::new());

        for _ in 0..2 {
            let (status, body) = send(
                app.clone(),
                Method::GET,
                "/api/validate?sessionId=live",
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"valid": true}));
        }
    }

    #[tokio::test]
    async fn test_repeated_session_id_uses_first_value() {
        let mut repo = MockRepository::new();
        repo.expect_find_active()
            .withf(|id| id == "first")
            .times(1)
            .returning(|id| {
                Ok(Some(SessionRecord {
                    session_id: id.to_string(),
                    is_active: true,
                }))
            });

        let (status, body) = get(repo, "/api/validate?sessionId=first&sessionId=second").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"valid": true}));
    }

    #[tokio::test]
    async fn test_encoded_session_id_is_decoded() {
        let mut repo = MockRepository::new();
        repo.expect_find_active()
            .withf(|id| id == "a b/c")
            .times(1)
            .returning(|_| Ok(None));

        let (status, _) = get(repo, "/api/validate?other=1&sessionId=a%20b%2Fc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_masked() {
        let mut repo = MockRepository::new();
        repo.expect_find_active()
            .returning(|_| Err(DomainError::DatabaseError("pool timed out".to_string())));

        let (status, body) = get(repo, "/api/validate?sessionId=live").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to validate session"}));
    }
}
