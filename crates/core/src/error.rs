//! Error types raised by task executors.

/// Result type for executor operations.
pub type TaskResult<T> = Result<T, TaskError>;

/// Failures a [`crate::TaskExecutor`] can raise.
///
/// Business-level non-success (skipped, failure) is not an error; it is
/// reported through [`crate::TaskOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The stored credential is no longer accepted upstream. Fatal for the server.
    #[error("Authentication token expired or invalid: {0}")]
    AuthExpired(String),

    /// Transport or unexpected upstream failure.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl TaskError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired(_))
    }
}
