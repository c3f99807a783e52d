//! Error types for calls against the inventory service.

use thiserror::Error;

/// Errors that can occur while talking to the inventory service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (DNS, refused, reset, ...)
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-2xx status
    #[error("Inventory service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a name → quantity object
    #[error("Malformed stocks response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Short category string used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Connection { .. } => "connection_error",
            ClientError::Status { .. } => "status_error",
            ClientError::Decode { .. } => "decode_error",
        }
    }
}
