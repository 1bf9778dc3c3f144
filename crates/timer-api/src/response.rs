//! Response envelopes

use serde::Serialize;
use serde_json::Value;

/// Body of every `/api/extend` answer.
#[derive(Debug, Serialize)]
pub struct ExtendResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtendResponse {
    pub fn success(session: Option<Value>) -> Self {
        Self {
            success: true,
            session,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            session: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
