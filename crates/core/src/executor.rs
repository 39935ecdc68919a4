// Executor seam between the protocol adapter and the remote overtime API

use crate::error::TaskResult;
use crate::types::TaskOutcome;

/// Performs the remote business actions behind the exposed tools.
///
/// Implementations return [`crate::TaskError::AuthExpired`] when the upstream
/// rejects the credential; callers treat that as fatal.
#[async_trait::async_trait]
pub trait TaskExecutor: Send + Sync {
    /// Submit overtime for `date` (YYYY-MM-DD). When `content` is `None` the
    /// executor fills it in from the daily report for that date.
    async fn execute(&self, date: &str, content: Option<&str>) -> TaskResult<TaskOutcome>;

    /// Check whether the configured token is still accepted
    async fn health_check_token(&self) -> TaskResult<bool>;

    /// Look up the daily report for `date`
    async fn get_daily_report(&self, date: &str) -> TaskResult<TaskOutcome>;
}
