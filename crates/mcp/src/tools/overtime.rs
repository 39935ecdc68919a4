// overtime.submit: file an overtime request for one day

use super::{json_schema_date, json_schema_object, json_schema_string};
use crate::protocol::ToolSchema;
use serde::Deserialize;

pub const NAME: &str = "overtime.submit";

#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeSubmitArgs {
    pub date: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl OvertimeSubmitArgs {
    /// Content to submit, exactly as the caller sent it
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

pub fn schema() -> ToolSchema {
    ToolSchema {
        name: NAME.to_string(),
        description: "Submit an overtime request for a single day. The overtime window is fixed \
            by server configuration. Provide `date` as YYYY-MM-DD. `content` describes the work \
            done; omit it to have the server fill it in from that day's daily report. The result \
            is a JSON record whose `task_status` is `success`, `skipped` (already submitted for \
            that date, do not retry) or `failure` (see `message`)."
            .to_string(),
        input_schema: json_schema_object(
            serde_json::json!({
                "date": json_schema_date("Overtime date in YYYY-MM-DD format, e.g. 2026-01-06"),
                "content": json_schema_string("Description of the overtime work (optional, defaults to the daily report)")
            }),
            &["date"],
        ),
    }
}
