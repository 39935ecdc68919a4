// Tool catalog: the fixed set of tools exposed over tools/list and tools/call

pub mod daily;
pub mod overtime;
mod schema;

pub use daily::DailyGetArgs;
pub use overtime::OvertimeSubmitArgs;
pub use schema::{json_schema_date, json_schema_object, json_schema_string};

use crate::error::HandlerError;
use crate::protocol::ToolSchema;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closed set of callable tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    DailyGet,
    OvertimeSubmit,
}

impl ToolName {
    pub const ALL: [ToolName; 2] = [ToolName::OvertimeSubmit, ToolName::DailyGet];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            daily::NAME => Some(ToolName::DailyGet),
            overtime::NAME => Some(ToolName::OvertimeSubmit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::DailyGet => daily::NAME,
            ToolName::OvertimeSubmit => overtime::NAME,
        }
    }

    pub fn schema(&self) -> ToolSchema {
        match self {
            ToolName::DailyGet => daily::schema(),
            ToolName::OvertimeSubmit => overtime::schema(),
        }
    }
}

/// Descriptors for every tool, in a stable order
pub fn catalog() -> Vec<ToolSchema> {
    ToolName::ALL.iter().map(ToolName::schema).collect()
}

/// Deserialize tool arguments; `null` counts as an empty mapping
pub fn parse_arguments<T: DeserializeOwned>(
    tool: ToolName,
    arguments: &serde_json::Value,
) -> Result<T, HandlerError> {
    let arguments = if arguments.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        arguments.clone()
    };

    serde_json::from_value(arguments).map_err(|e| {
        HandlerError::Internal(format!("Invalid arguments for {}: {}", tool.as_str(), e))
    })
}

/// Check that `date` is a real calendar date written as YYYY-MM-DD
pub fn validate_date(date: &str) -> Result<NaiveDate, HandlerError> {
    let trimmed = date.trim();
    if trimmed.len() != 10 {
        return Err(invalid_date(date));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid_date(date))
}

fn invalid_date(date: &str) -> HandlerError {
    HandlerError::Internal(format!(
        "Invalid date '{}': expected YYYY-MM-DD, e.g. 2026-01-06",
        date
    ))
}
