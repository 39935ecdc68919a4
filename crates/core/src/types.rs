use serde::{Deserialize, Serialize};

/// Business outcome of a task execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Success,
    /// Nothing to do, e.g. overtime was already submitted for the date
    Skipped,
    Failure,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Success => "success",
            TaskStatus::Skipped => "skipped",
            TaskStatus::Failure => "failure",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured record returned by a [`crate::TaskExecutor`].
///
/// `data` is opaque to the protocol layer; it is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub task_status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TaskOutcome {
    pub fn success(status_code: Option<u16>, data: serde_json::Value) -> Self {
        Self {
            task_status: TaskStatus::Success,
            status_code,
            data,
            message: None,
        }
    }

    pub fn skipped(
        status_code: Option<u16>,
        data: serde_json::Value,
        message: impl Into<String>,
    ) -> Self {
        Self {
            task_status: TaskStatus::Skipped,
            status_code,
            data,
            message: Some(message.into()),
        }
    }

    pub fn failure(
        status_code: Option<u16>,
        data: serde_json::Value,
        message: impl Into<String>,
    ) -> Self {
        Self {
            task_status: TaskStatus::Failure,
            status_code,
            data,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.task_status == TaskStatus::Success
    }

    /// Message for logging; falls back to a placeholder when the executor gave none
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("no message")
    }
}
