// Task dispatch: hands validated requests to the executor and records the outcome

use jiaban_core::{TaskExecutor, TaskOutcome, TaskResult, TaskStatus};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Longest payload dump written to the log, in characters
const MAX_LOGGED_PAYLOAD: usize = 4000;

/// Bridges tool calls to the [`TaskExecutor`] and logs every outcome.
///
/// Outcomes are returned unchanged. Executor errors, including
/// authentication expiry, propagate to the caller untouched.
#[derive(Clone)]
pub struct TaskDispatcher {
    executor: Arc<dyn TaskExecutor>,
}

impl TaskDispatcher {
    pub fn new(executor: Arc<dyn TaskExecutor>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &Arc<dyn TaskExecutor> {
        &self.executor
    }

    /// Submit overtime for `date`, filling content from the daily report when `None`
    pub async fn dispatch_overtime(
        &self,
        date: &str,
        content: Option<&str>,
    ) -> TaskResult<TaskOutcome> {
        info!(date, auto_content = content.is_none(), "Dispatching overtime submission");

        let outcome = self.executor.execute(date, content).await?;
        record_outcome("Overtime submission", date, &outcome);

        Ok(outcome)
    }

    /// Look up the daily report for `date`
    pub async fn daily_report(&self, date: &str) -> TaskResult<TaskOutcome> {
        info!(date, "Fetching daily report");

        let outcome = self.executor.get_daily_report(date).await?;
        record_outcome("Daily report lookup", date, &outcome);

        Ok(outcome)
    }
}

fn record_outcome(action: &str, date: &str, outcome: &TaskOutcome) {
    match outcome.task_status {
        TaskStatus::Success => {
            info!(date, status_code = ?outcome.status_code, "{} succeeded", action);
            debug!("{} response: {}", action, render_payload(&outcome.data));
        }
        TaskStatus::Skipped => {
            info!(date, reason = outcome.message_or_default(), "{} skipped", action);
            debug!("{} skip evidence: {}", action, render_payload(&outcome.data));
        }
        TaskStatus::Failure => {
            error!(
                date,
                status_code = ?outcome.status_code,
                "{} failed: {}",
                action,
                outcome.message_or_default()
            );
        }
    }
}

/// Render an opaque payload for the log on a single line.
///
/// Control characters are escaped and long payloads are cut short.
pub fn render_payload(data: &serde_json::Value) -> String {
    let raw = match data {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    let mut rendered = String::with_capacity(raw.len().min(MAX_LOGGED_PAYLOAD));
    for (count, ch) in raw.chars().enumerate() {
        if count == MAX_LOGGED_PAYLOAD {
            rendered.push_str("... (truncated)");
            break;
        }
        if ch.is_control() {
            rendered.extend(ch.escape_default());
        } else {
            rendered.push(ch);
        }
    }
    rendered
}
