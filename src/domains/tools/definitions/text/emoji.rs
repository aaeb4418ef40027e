//! Emoji converter tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::common::{parse_route_params, structured_result};

const EMOJI_TABLE: &[(&str, &str)] = &[
    ("happy", "\u{1F60A}"),
    ("sad", "\u{1F622}"),
    ("love", "\u{2764}\u{FE0F}"),
    ("fire", "\u{1F525}"),
    ("cool", "\u{1F60E}"),
    ("star", "\u{2B50}"),
    ("rocket", "\u{1F680}"),
    ("cat", "\u{1F431}"),
    ("dog", "\u{1F436}"),
    ("beer", "\u{1F37A}"),
    ("pizza", "\u{1F355}"),
    ("sun", "\u{2600}\u{FE0F}"),
];

/// Parameters for the emoji converter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EmojiConverterParams {
    /// Text whose words should be replaced by emoji.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct EmojiOutput {
    pub converted: String,
    /// Number of words that were replaced.
    pub replaced: usize,
}

fn lookup(word: &str) -> Option<&'static str> {
    let clean: String = word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase();
    EMOJI_TABLE
        .iter()
        .find(|(name, _)| *name == clean)
        .map(|(_, emoji)| *emoji)
}

/// Replace each space-separated word found in the table by its emoji.
pub fn convert(text: &str) -> EmojiOutput {
    let mut replaced = 0;
    let converted = text
        .split(' ')
        .map(|word| match lookup(word) {
            Some(emoji) => {
                replaced += 1;
                emoji
            }
            None => word,
        })
        .collect::<Vec<_>>()
        .join(" ");
    EmojiOutput { converted, replaced }
}

/// Emoji converter tool.
pub struct EmojiConverterTool;

impl EmojiConverterTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "emoji_converter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Replace words like \"happy\", \"fire\" or \"rocket\" in a text with matching emoji.";

    #[instrument(skip_all)]
    pub fn execute(params: &EmojiConverterParams) -> CallToolResult {
        let output = convert(&params.text);
        structured_result(output.converted.clone(), &output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<EmojiConverterParams>().into(),
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
                let params: EmojiConverterParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
