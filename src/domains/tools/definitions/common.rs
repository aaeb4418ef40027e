//! Helpers shared by every tool definition.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Create an error result with a message shown inline to the caller.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Create a success result carrying a text summary and structured output.
pub fn structured_result<T: Serialize>(summary: impl Into<String>, output: &T) -> CallToolResult {
    match serde_json::to_value(output) {
        Ok(value) => CallToolResult {
            content: vec![Content::text(summary.into())],
            structured_content: Some(value),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(format!("Failed to serialize tool output: {}", e)),
    }
}

/// Convert a tool outcome into an MCP result.
pub fn into_call_result<T: Serialize>(
    outcome: Result<T, ToolError>,
    summary: impl FnOnce(&T) -> String,
) -> CallToolResult {
    match outcome {
        Ok(output) => {
            let text = summary(&output);
            structured_result(text, &output)
        }
        Err(e) => error_result(e.to_string()),
    }
}

/// Deserialize tool parameters from a JSON object.
pub fn parse_params<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Deserialize parameters handed over by rmcp.
pub fn parse_route_params<P: DeserializeOwned>(
    args: serde_json::Map<String, Value>,
) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Decode a base64 payload, accepting an optional `data:` URL prefix.
///
/// Returns the declared MIME type (if any) and the raw bytes.
pub fn decode_data_url(input: &str) -> Result<(Option<String>, Vec<u8>), ToolError> {
    let trimmed = input.trim();
    let (mime, payload) = match trimmed.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| ToolError::invalid_arguments("Malformed data URL"))?;
            let mime = header.strip_suffix(";base64").unwrap_or(header);
            let mime = (!mime.is_empty()).then(|| mime.to_string());
            (mime, payload)
        }
        None => (None, trimmed),
    };

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ToolError::invalid_arguments(format!("Invalid base64 payload: {}", e)))?;
    Ok((mime, bytes))
}

/// Encode bytes as a base64 `data:` URL.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Round a ratio to a whole percentage.
pub fn reduction_percent(before: usize, after: usize) -> i64 {
    if before == 0 {
        return 0;
    }
    ((1.0 - after as f64 / before as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let (mime, bytes) = decode_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(mime.as_deref(), Some("image/png"));
        assert_eq!(bytes, b"hello");

        let (mime, bytes) = decode_data_url("aGVs\nbG8=").unwrap();
        assert!(mime.is_none());
        assert_eq!(bytes, b"hello");

        assert!(decode_data_url("data:image/png;base64").is_err());
        assert!(decode_data_url("***").is_err());
    }

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url("text/plain", b"hi"), "data:text/plain;base64,aGk=");
    }

    #[test]
    fn test_reduction_percent() {
        assert_eq!(reduction_percent(100, 25), 75);
        assert_eq!(reduction_percent(0, 0), 0);
        assert_eq!(reduction_percent(3, 2), 33);
    }

    #[test]
    fn test_parse_params_null_is_empty_object() {
        #[derive(serde::Deserialize)]
        struct P {
            #[serde(default)]
            n: u32,
        }
        let p: P = parse_params(Value::Null).unwrap();
        assert_eq!(p.n, 0);
        assert!(parse_params::<P>(serde_json::json!({"n": "x"})).is_err());
    }

    #[test]
    fn test_structured_result() {
        let result = structured_result("ok", &serde_json::json!({"a": 1}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content.unwrap()["a"], 1);
    }
}
