//! JSON formatter tool definition.
//!
//! Beautifies JSON with a two or four space indent, or minifies it. Key order
//! is kept as written.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::tools::ToolError;

/// What to do with the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JsonMode {
    #[default]
    Format,
    Minify,
}

/// Parameters for the JSON formatter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonFormatterParams {
    /// JSON text to process.
    pub input: String,

    /// `format` or `minify`.
    #[serde(default)]
    pub mode: JsonMode,

    /// Indent width used by `format`: 2 or 4.
    #[serde(default = "default_indent")]
    pub indent: u8,
}

fn default_indent() -> u8 {
    2
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct JsonOutput {
    pub output: String,
    pub mode: JsonMode,
}

/// Re-serialize `value` with an indent of `indent` spaces.
fn pretty(value: &Value, indent: u8) -> Result<String, ToolError> {
    let indent = vec![b' '; indent as usize];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value
        .serialize(&mut ser)
        .map_err(|e| ToolError::internal(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ToolError::internal(e.to_string()))
}

/// Format or minify `input`.
///
/// A parse failure is reported with the parser's message and nothing else.
pub fn process(input: &str, mode: JsonMode, indent: u8) -> Result<String, ToolError> {
    if mode == JsonMode::Format && indent != 2 && indent != 4 {
        return Err(ToolError::invalid_arguments(format!(
            "Indent must be 2 or 4, got {}",
            indent
        )));
    }

    let value: Value = serde_json::from_str(input)
        .map_err(|e| ToolError::invalid_arguments(format!("Invalid JSON: {}", e)))?;

    match mode {
        JsonMode::Format => pretty(&value, indent),
        JsonMode::Minify => {
            serde_json::to_string(&value).map_err(|e| ToolError::internal(e.to_string()))
        }
    }
}

/// JSON formatter tool.
pub struct JsonFormatterTool;

impl JsonFormatterTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "json_formatter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Validate JSON and either beautify it (2 or 4 space indent) or minify it. Key order is preserved.";

    #[instrument(skip_all, fields(mode = ?params.mode, indent = params.indent))]
    pub fn execute(params: &JsonFormatterParams) -> CallToolResult {
        info!("Processing {} bytes of JSON", params.input.len());
        let outcome = process(&params.input, params.mode, params.indent).map(|output| JsonOutput {
            output,
            mode: params.mode,
        });
        into_call_result(outcome, |out| out.output.clone())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<JsonFormatterParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: JsonFormatterParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"a":1,"b":[1,2]}"#;

    #[test]
    fn test_format_two_spaces_keeps_order() {
        let out = process(SAMPLE, JsonMode::Format, 2).unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_minify_restores_original() {
        let pretty = process(SAMPLE, JsonMode::Format, 2).unwrap();
        let min = process(&pretty, JsonMode::Minify, 2).unwrap();
        assert_eq!(min, SAMPLE);
    }

    #[test]
    fn test_four_space_indent() {
        let out = process(r#"{"z":{"y":true}}"#, JsonMode::Format, 4).unwrap();
        assert_eq!(out, "{\n    \"z\": {\n        \"y\": true\n    }\n}");
    }

    #[test]
    fn test_round_trip_preserves_value() {
        for input in [r#"[]"#, r#"{"k":[{"x":null}],"n":-3.5}"#, r#""text""#] {
            let formatted = process(input, JsonMode::Format, 4).unwrap();
            let min = process(&formatted, JsonMode::Minify, 2).unwrap();
            let a: Value = serde_json::from_str(&min).unwrap();
            let b: Value = serde_json::from_str(input).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_invalid_json_reports_parser_message() {
        let err = process("{\"a\":", JsonMode::Format, 2).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn test_rejects_unsupported_indent() {
        assert!(process(SAMPLE, JsonMode::Format, 3).is_err());
        assert!(process(SAMPLE, JsonMode::Minify, 3).is_ok());
    }

    #[test]
    fn test_execute_error_is_inline() {
        let result = JsonFormatterTool::execute(&JsonFormatterParams {
            input: "nope".to_string(),
            mode: JsonMode::Format,
            indent: 2,
        });
        assert!(result.is_error.unwrap_or(false));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("Invalid JSON"));
    }
}
