// ============================================================================
// Session Timer Infrastructure - Upstream Session Gateway
// File: crates/timer-infrastructure/src/upstream/http_gateway.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

use timer_core::domain::{ExtendCommand, ExtendedSession};
use timer_core::error::DomainError;
use timer_core::gateways::SessionGateway;
use timer_shared::config::UpstreamSettings;

#[derive(Debug, Serialize)]
struct ExtendBody {
    seconds: i64,
}

/// Bearer-authenticated REST client for the session service.
#[derive(Clone)]
pub struct HttpSessionGateway {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpSessionGateway {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, DomainError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            DomainError::InternalError(format!(
                "Invalid upstream base URL {}: {}",
                settings.base_url, e
            ))
        })?;

        let mut builder = Client::builder();
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    /// `{base}/sessions/{session_id}/extend`, keeping any base path prefix
    /// and encoding the id as a single segment.
    fn extend_url(&self, session_id: &str) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::InternalError("Upstream base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["sessions", session_id, "extend"]);
        Ok(url)
    }
}

#[async_trait]
impl SessionGateway for HttpSessionGateway {
    async fn extend_session(&self, command: &ExtendCommand) -> Result<ExtendedSession, DomainError> {
        let url = self.extend_url(&command.session_id)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&ExtendBody {
                seconds: command.seconds,
            })
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach session service: {}", e);
                DomainError::UpstreamUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // Any JSON shape is accepted; only a `message` string is read.
            let body: Value = response.json().await.map_err(|e| {
                DomainError::InvalidUpstreamResponse(format!(
                    "Unreadable error body with status {}: {}",
                    status, e
                ))
            })?;
            if body.is_null() {
                return Err(DomainError::InvalidUpstreamResponse(format!(
                    "Null error body with status {}",
                    status
                )));
            }

            let message = body.get("message").and_then(Value::as_str).map(str::to_string);
            warn!(
                "Session service rejected extend for {}: {} {:?}",
                command.session_id, status, message
            );
            return Err(DomainError::UpstreamRejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ExtendedSession>()
            .await
            .map_err(|e| DomainError::InvalidUpstreamResponse(e.to_string()))
    }
}
