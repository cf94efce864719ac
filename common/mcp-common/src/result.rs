//! Result helpers for MCP tool responses
//!
//! Tool payloads are serialized to pretty JSON and returned as a single text
//! content item. Object payloads get a top-level `"status"` field so clients
//! can tell a finished report from an error without inspecting its shape.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::internal_error;

/// Status string attached to successful tool responses
pub const STATUS_SUCCESS: &str = "success";

/// Create a successful JSON response from any serializable data
///
/// ```rust,ignore
/// use mcp_common::json_success;
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     json_success(&report)
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let value = with_status(data, STATUS_SUCCESS)?;
    let json =
        serde_json::to_string_pretty(&value).map_err(|e| internal_error(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Serialize `data` and stamp a `status` field onto it
///
/// Non-object payloads (arrays, scalars) are returned unchanged.
pub fn with_status<T: Serialize>(data: &T, status: &str) -> Result<Value, McpError> {
    let mut value = serde_json::to_value(data).map_err(|e| internal_error(e.to_string()))?;
    if let Value::Object(map) = &mut value {
        map.insert("status".to_string(), Value::String(status.to_string()));
    }
    Ok(value)
}

/// Parse the JSON text of the first content item of a tool result
///
/// Mostly useful to in-process callers and tests.
pub fn first_json(result: &CallToolResult) -> Option<Value> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .and_then(|t| serde_json::from_str(&t.text).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_json_success() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        let result = json_success(&data).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let json = first_json(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["value"], 42);
    }

    #[test]
    fn test_with_status_leaves_arrays_alone() {
        let value = with_status(&vec![1, 2, 3], STATUS_SUCCESS).unwrap();
        assert_eq!(value, serde_json::json!([1, 2, 3]));
    }
}
