//! Upstream session service gateway trait (port)

use async_trait::async_trait;

use crate::domain::{ExtendCommand, ExtendedSession};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// Asks the upstream service to add `command.seconds` to the session.
    ///
    /// A non-2xx answer maps to [`DomainError::UpstreamRejected`] carrying the
    /// upstream status and its `message`, when the body has one.
    async fn extend_session(&self, command: &ExtendCommand) -> Result<ExtendedSession, DomainError>;
}
