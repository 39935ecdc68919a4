// Offline executor used when simulation is enabled

use crate::error::TaskResult;
use crate::executor::TaskExecutor;
use crate::types::TaskOutcome;
use serde_json::json;

const SIMULATED_REPORT_CONTENT: &str = "Simulated daily report content";

/// Executor that never leaves the process. Every submission succeeds.
#[derive(Debug, Clone, Default)]
pub struct SimulatedExecutor;

impl SimulatedExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TaskExecutor for SimulatedExecutor {
    async fn execute(&self, date: &str, content: Option<&str>) -> TaskResult<TaskOutcome> {
        let content = content.unwrap_or(SIMULATED_REPORT_CONTENT);
        tracing::debug!(date, "Simulating overtime submission");

        Ok(TaskOutcome::success(
            Some(200),
            json!({
                "simulated": true,
                "date": date,
                "content": content,
            }),
        ))
    }

    async fn health_check_token(&self) -> TaskResult<bool> {
        Ok(true)
    }

    async fn get_daily_report(&self, date: &str) -> TaskResult<TaskOutcome> {
        Ok(TaskOutcome::success(
            Some(200),
            json!({
                "simulated": true,
                "date": date,
                "content": SIMULATED_REPORT_CONTENT,
            }),
        ))
    }
}
