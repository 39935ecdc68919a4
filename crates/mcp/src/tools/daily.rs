// daily.get: read the daily report for one day

use super::{json_schema_date, json_schema_object};
use crate::protocol::ToolSchema;
use serde::Deserialize;

pub const NAME: &str = "daily.get";

#[derive(Debug, Clone, Deserialize)]
pub struct DailyGetArgs {
    pub date: String,
}

pub fn schema() -> ToolSchema {
    ToolSchema {
        name: NAME.to_string(),
        description: "Fetch the daily report for a date (YYYY-MM-DD). Use it to review what \
            would be submitted as overtime content before calling overtime.submit."
            .to_string(),
        input_schema: json_schema_object(
            serde_json::json!({
                "date": json_schema_date("Report date in YYYY-MM-DD format")
            }),
            &["date"],
        ),
    }
}
