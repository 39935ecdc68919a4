//! Overtime submission against the remote API.

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::transport::{describe_body, ApiResponse, HttpTransport};
use jiaban_core::{TaskExecutor, TaskOutcome, TaskResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

const TOKEN_CHECK_PATH: &str = "token/check";
const DAILY_REPORT_PATH: &str = "daily-report";
const OVERTIME_PATH: &str = "overtime";

/// Body of an overtime submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OvertimeSubmission<'a> {
    date: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
}

/// [`TaskExecutor`] backed by the overtime HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTaskExecutor {
    http: HttpTransport,
}

impl HttpTaskExecutor {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;
        Ok(Self { http })
    }

    async fn fetch_report(&self, date: &str) -> ClientResult<ApiResponse> {
        self.http
            .get_with_query(DAILY_REPORT_PATH, &[("date", date)])
            .await
    }

    async fn submit(
        &self,
        date: &str,
        content: &str,
        project: Option<&str>,
    ) -> ClientResult<TaskOutcome> {
        let config = self.http.config();
        let submission = OvertimeSubmission {
            date,
            start_time: &config.overtime_start,
            end_time: &config.overtime_end,
            content,
            project,
        };
        debug!(date, "Submitting overtime");

        let response = self.http.post_json(OVERTIME_PATH, &submission).await?;
        Ok(submission_outcome(date, response))
    }
}

#[async_trait::async_trait]
impl TaskExecutor for HttpTaskExecutor {
    async fn execute(&self, date: &str, content: Option<&str>) -> TaskResult<TaskOutcome> {
        if let Some(content) = content {
            return Ok(self.submit(date, content, None).await?);
        }

        info!(date, "No content given, filling from daily report");
        let report = self.fetch_report(date).await?;
        if !report.is_success() {
            return Ok(report_outcome(date, report));
        }

        match report_field(&report.body, "content") {
            Some(content) => {
                let project = report_field(&report.body, "project");
                Ok(self.submit(date, content, project).await?)
            }
            None => Ok(TaskOutcome::failure(
                Some(report.status),
                report.body,
                format!("Daily report for {} has no content to submit", date),
            )),
        }
    }

    async fn health_check_token(&self) -> TaskResult<bool> {
        let response = self.http.get(TOKEN_CHECK_PATH).await?;
        Ok(response.is_success())
    }

    async fn get_daily_report(&self, date: &str) -> TaskResult<TaskOutcome> {
        let response = self.fetch_report(date).await?;
        Ok(report_outcome(date, response))
    }
}

fn report_outcome(date: &str, response: ApiResponse) -> TaskOutcome {
    match response.status {
        status if response.is_success() => TaskOutcome::success(Some(status), response.body),
        404 => TaskOutcome::failure(
            Some(404),
            response.body,
            format!("No daily report found for {}", date),
        ),
        status => {
            let message = format!("Daily report lookup failed: {}", describe_body(&response.body));
            TaskOutcome::failure(Some(status), response.body, message)
        }
    }
}

fn submission_outcome(date: &str, response: ApiResponse) -> TaskOutcome {
    match response.status {
        status if response.is_success() => TaskOutcome::success(Some(status), response.body),
        409 => TaskOutcome::skipped(
            Some(409),
            response.body,
            format!("Overtime already submitted for {}", date),
        ),
        status => {
            let message = format!("Overtime submission rejected: {}", describe_body(&response.body));
            TaskOutcome::failure(Some(status), response.body, message)
        }
    }
}

/// Read a string field from a report body, looking inside a `data` envelope too.
fn report_field<'a>(body: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .or_else(|| body.get("data").and_then(|data| data.get(key)))
        .and_then(|value| value.as_str())
        .filter(|value| !value.trim().is_empty())
}
