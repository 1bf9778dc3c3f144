//! Session store repository trait (port)

use async_trait::async_trait;

use crate::domain::SessionRecord;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// The row with this id and `is_active = true`, if any.
    async fn find_active(&self, session_id: &str) -> Result<Option<SessionRecord>, DomainError>;

    /// Round trip to the store, used by readiness probes.
    async fn ping(&self) -> Result<(), DomainError>;
}
