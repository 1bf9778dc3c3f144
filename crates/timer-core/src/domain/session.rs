// ============================================================================
// Session Timer Core - Session Entities
// File: crates/timer-core/src/domain/session.rs
// Description: Client timer reference, store row, and extend command
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// Read-only copy of a running session handed to the countdown at mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTimer {
    pub session_id: String,
    pub start_time: DateTime<Utc>,
    pub duration_seconds: i64,
}

impl SessionTimer {
    pub fn new(
        session_id: impl Into<String>,
        start_time: DateTime<Utc>,
        duration_seconds: i64,
    ) -> Result<Self, DomainError> {
        let session_id = session_id.into();
        if session_id.trim().is_empty() {
            return Err(DomainError::ValidationError("Session ID required".to_string()));
        }
        if duration_seconds <= 0 {
            return Err(DomainError::ValidationError(format!(
                "Session duration must be positive, got {}",
                duration_seconds
            )));
        }

        Ok(Self {
            session_id,
            start_time,
            duration_seconds,
        })
    }

    /// Whole seconds left at `now`, clamped at zero.
    ///
    /// Elapsed time is floored to whole seconds, so a clock reading before
    /// `start_time` yields slightly more than the full duration.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        let elapsed_ms = (now - self.start_time).num_milliseconds();
        let elapsed = elapsed_ms.div_euclid(1000);
        (self.duration_seconds - elapsed).max(0)
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.start_time + chrono::Duration::seconds(self.duration_seconds)
    }
}

/// Row of `timer_sessions` matched by the validation query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub session_id: String,
    pub is_active: bool,
}

/// A checked request to buy more time for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendCommand {
    pub session_id: String,
    pub seconds: i64,
}

impl ExtendCommand {
    /// Builds a command from loosely typed request fields.
    ///
    /// A missing or falsy field (`null`, `false`, `0`, `""`) is reported as
    /// missing. A numeric session id is used in its decimal form; `seconds`
    /// must be a whole number.
    pub fn new(session_id: Option<&Value>, seconds: Option<&Value>) -> Result<Self, DomainError> {
        let (Some(session_id), Some(seconds)) = (
            session_id.filter(|value| is_truthy(value)),
            seconds.filter(|value| is_truthy(value)),
        ) else {
            return Err(DomainError::ValidationError("Missing required fields".to_string()));
        };

        let session_id = match session_id {
            Value::String(id) => id.clone(),
            Value::Number(id) => id.to_string(),
            other => {
                return Err(DomainError::ValidationError(format!(
                    "Session ID must be a string, got {}",
                    other
                )))
            }
        };
        let seconds = seconds.as_i64().ok_or_else(|| {
            DomainError::ValidationError(format!("Seconds must be a whole number, got {}", seconds))
        })?;

        Ok(Self {
            session_id,
            seconds,
        })
    }
}

/// JSON truthiness as browsers and Node judge it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Upstream answer to a successful extension. The session payload is owned
/// by the upstream service and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
}
