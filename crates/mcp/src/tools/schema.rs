// Helper functions for creating tool input schemas

use serde_json::Value;

pub fn json_schema_object(properties: Value, required: &[&str]) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

/// String constrained to a calendar date
pub fn json_schema_date(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "format": "date",
        "pattern": "^\\d{4}-\\d{2}-\\d{2}$",
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_schema_lists_required() {
        let schema = json_schema_object(json!({"a": json_schema_string("A")}), &["a"]);

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["a"]));
        assert_eq!(schema["properties"]["a"]["type"], "string");
    }

    #[test]
    fn test_date_schema_is_a_string() {
        let schema = json_schema_date("day");
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["format"], "date");
    }
}
