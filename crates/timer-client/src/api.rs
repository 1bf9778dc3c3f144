//! Client for the extend endpoint

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use timer_core::domain::{is_truthy, ExtendCommand};
use timer_shared::constants::EXTEND_ROUTE;

use crate::error::ClientError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtendPayload<'a> {
    session_id: &'a str,
    seconds: i64,
}

/// Decoded 2xx body of the extend endpoint. Any truthy `success` counts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtendReply {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub session: Option<Value>,
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtendApi: Send + Sync {
    /// Non-2xx answers are errors; a 2xx body is returned as-is, including
    /// `success: false`.
    async fn extend(&self, command: &ExtendCommand) -> Result<ExtendReply, ClientError>;
}

#[derive(Clone)]
pub struct HttpExtendApi {
    client: Client,
    endpoint: Url,
}

impl HttpExtendApi {
    /// `origin` is the server the page was served from, e.g.
    /// `http://localhost:3000`.
    pub fn new(origin: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(origin)
            .and_then(|base| base.join(EXTEND_ROUTE))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", origin, e)))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl ExtendApi for HttpExtendApi {
    async fn extend(&self, command: &ExtendCommand) -> Result<ExtendReply, ClientError> {
        debug!("POST {} for session {}", self.endpoint, command.session_id);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ExtendPayload {
                session_id: &command.session_id,
                seconds: command.seconds,
            })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<ExtendReply>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
