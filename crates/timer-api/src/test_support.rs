//! Router fixtures shared by handler tests

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

use timer_core::domain::{ExtendCommand, ExtendedSession, SessionRecord};
use timer_core::error::DomainError;
use timer_core::gateways::SessionGateway;
use timer_core::repositories::SessionRepository;
use timer_core::services::SessionService;
use timer_shared::config::{AppConfig, AppSettings, DatabaseSettings, LogSettings, UpstreamSettings};

use crate::{build_router, AppState};

mock! {
    pub Repository {}

    #[async_trait]
    impl SessionRepository for Repository {
        async fn find_active(&self, session_id: &str) -> Result<Option<SessionRecord>, DomainError>;
        async fn ping(&self) -> Result<(), DomainError>;
    }
}

mock! {
    pub Gateway {}

    #[async_trait]
    impl SessionGateway for Gateway {
        async fn extend_session(&self, command: &ExtendCommand) -> Result<ExtendedSession, DomainError>;
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            name: "timer-server".to_string(),
        },
        database: DatabaseSettings {
            url: "postgres://localhost/timer_test".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        },
        upstream: UpstreamSettings {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 0,
        },
        log: LogSettings {
            level: "debug".to_string(),
            json: false,
            directory: None,
        },
    }
}

pub fn app(repo: MockRepository, gateway: MockGateway) -> Router {
    build_router(AppState {
        session_service: Arc::new(SessionService::new(Arc::new(repo), Arc::new(gateway))),
        config: Arc::new(test_config()),
    })
}

/// Sends one request and decodes the JSON body (`Null` when empty).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
