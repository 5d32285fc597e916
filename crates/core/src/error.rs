//! Unified error types for the playbook advisor.
//!
//! Each variant carries a stable code prefix and maps onto a JSON-RPC error
//! code when surfaced through the MCP server.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the playbook advisor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty service name).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// No playbook matched the request.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// The remote playbook repository could not be reached or answered
    /// with a non-success status.
    #[error("REMOTE_UNAVAILABLE: {0}")]
    RemoteUnavailable(String),

    /// Output could not be serialized.
    #[error("SERIALIZATION_FAILED: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::NotFound(msg) => (-32001, msg.clone()),
            Error::RemoteUnavailable(msg) => (-32008, msg.clone()),
            Error::Serialization(e) => (-32603, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
