//! Base64 encode/decode tool definition.

use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::STANDARD},
};
use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::super::common::{parse_route_params, structured_result};

/// Accepts input with or without trailing `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Base64Mode {
    #[default]
    Encode,
    Decode,
}

impl Base64Mode {
    fn as_str(self) -> &'static str {
        match self {
            Base64Mode::Encode => "encode",
            Base64Mode::Decode => "decode",
        }
    }
}

/// Parameters for the base64 tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64Params {
    /// Text to encode, or base64 to decode.
    #[serde(default)]
    pub input: String,

    /// `encode` or `decode`.
    #[serde(default)]
    pub mode: Base64Mode,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct Base64Output {
    pub output: String,
    pub mode: Base64Mode,
    /// False when the input could not be converted.
    pub valid: bool,
}

/// Encode UTF-8 text as standard base64.
pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode base64 into UTF-8 text, ignoring embedded whitespace.
pub fn decode(input: &str) -> Option<String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = LENIENT.decode(compact.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Run one conversion. Failures produce a literal error string, not an error.
pub fn convert(input: &str, mode: Base64Mode) -> Base64Output {
    let converted = match mode {
        Base64Mode::Encode => Some(encode(input)),
        Base64Mode::Decode => decode(input),
    };

    match converted {
        Some(output) => Base64Output {
            output,
            mode,
            valid: true,
        },
        None => {
            warn!("Invalid input for base64 {}", mode.as_str());
            Base64Output {
                output: format!("Error: Invalid input for {}", mode.as_str()),
                mode,
                valid: false,
            }
        }
    }
}

/// Base64 tool.
pub struct Base64Tool;

impl Base64Tool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "base64";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Encode text to base64 or decode base64 back to text (UTF-8).";

    #[instrument(skip_all, fields(mode = ?params.mode))]
    pub fn execute(params: &Base64Params) -> CallToolResult {
        let output = convert(&params.input, params.mode);
        structured_result(output.output.clone(), &output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Base64Params>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<Base64Output>().into()),
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
                let params: Base64Params = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
