// Failures raised by method handlers and how they map onto JSON-RPC errors

use crate::protocol::JsonRpcError;
use jiaban_core::TaskError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HandlerError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Unknown tool name: {0}")]
    UnknownTool(String),

    /// Fatal: the dispatch loop replies and stops
    #[error("Authentication token expired or invalid: {0}")]
    AuthExpired(String),

    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AuthExpired(_))
    }

    pub fn to_rpc_error(&self) -> JsonRpcError {
        match self {
            Self::UnknownMethod(method) => JsonRpcError::method_not_found(method),
            Self::UnknownTool(name) => JsonRpcError::unknown_tool(name),
            Self::AuthExpired(detail) => JsonRpcError::auth_expired(detail),
            Self::Internal(message) => JsonRpcError::server_error(message.clone()),
        }
    }
}

impl From<TaskError> for HandlerError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::AuthExpired(detail) => Self::AuthExpired(detail),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("Serialization failed: {}", err))
    }
}
