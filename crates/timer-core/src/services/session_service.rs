// ============================================================================
// Session Timer Core - Session Service
// File: crates/timer-core/src/services/session_service.rs
// ============================================================================
//! Extend and validate flows behind the HTTP endpoints

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{ExtendCommand, ExtendedSession};
use crate::error::DomainError;
use crate::gateways::SessionGateway;
use crate::repositories::SessionRepository;

/// Stateless service; each call is an independent round trip.
#[derive(Clone)]
pub struct SessionService {
    session_repo: Arc<dyn SessionRepository>,
    session_gateway: Arc<dyn SessionGateway>,
}

impl SessionService {
    pub fn new(
        session_repo: Arc<dyn SessionRepository>,
        session_gateway: Arc<dyn SessionGateway>,
    ) -> Self {
        Self {
            session_repo,
            session_gateway,
        }
    }

    /// Forward an extension to the upstream session service.
    pub async fn extend(
        &self,
        session_id: Option<&Value>,
        seconds: Option<&Value>,
    ) -> Result<ExtendedSession, DomainError> {
        let command = ExtendCommand::new(session_id, seconds)?;
        info!(
            "Extending session {} by {} seconds",
            command.session_id, command.seconds
        );

        let extended = self.session_gateway.extend_session(&command).await?;

        info!("Session {} extended", command.session_id);
        Ok(extended)
    }

    /// Succeeds only when the store holds an active row for the id.
    pub async fn validate(&self, session_id: Option<&str>) -> Result<(), DomainError> {
        let session_id = session_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DomainError::ValidationError("Session ID required".to_string()))?;

        match self.session_repo.find_active(session_id).await? {
            Some(_) => Ok(()),
            None => {
                warn!("Validation failed: no active session {}", session_id);
                Err(DomainError::SessionNotFound)
            }
        }
    }

    pub async fn check_store(&self) -> Result<(), DomainError> {
        self.session_repo.ping().await
    }
}
