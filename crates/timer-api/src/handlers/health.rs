use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use timer_core::services::SessionService;
use timer_shared::config::AppConfig;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    name: String,
    version: String,
}

pub async fn health_check(State(config): State<Arc<AppConfig>>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            name: config.app.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// 503 while the session store cannot be reached.
pub async fn readiness_check(State(session_service): State<Arc<SessionService>>) -> StatusCode {
    match session_service.check_store().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
