//! Client errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Extend endpoint answered HTTP {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Undecodable response: {0}")]
    Decode(String),
}
