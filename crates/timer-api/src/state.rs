use axum::extract::FromRef;
use std::sync::Arc;

use timer_core::services::SessionService;
use timer_shared::config::AppConfig;

/// Immutable for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<SessionService> {
    fn from_ref(state: &AppState) -> Self {
        state.session_service.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
