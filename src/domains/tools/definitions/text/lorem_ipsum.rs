//! Lorem ipsum generator tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{parse_route_params, structured_result};

/// The classic passage every unit is cycled from.
const PASSAGE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

const MIN_COUNT: usize = 1;
const MAX_COUNT: usize = 100;

/// Unit the count applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoremUnit {
    #[default]
    Paragraphs,
    Sentences,
    Words,
}

/// Parameters for the lorem ipsum tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LoremIpsumParams {
    /// How many units to generate (1-100).
    #[serde(default = "default_count")]
    pub count: usize,

    /// Paragraphs, sentences or words.
    #[serde(default)]
    pub unit: LoremUnit,
}

fn default_count() -> usize {
    3
}

/// Generated placeholder text.
#[derive(Debug, Serialize, JsonSchema)]
pub struct LoremOutput {
    pub text: String,
    pub count: usize,
    pub unit: LoremUnit,
}

/// Generate `count` units of placeholder text, clamping `count` to 1-100.
pub fn generate(count: usize, unit: LoremUnit) -> String {
    let count = count.clamp(MIN_COUNT, MAX_COUNT);
    match unit {
        LoremUnit::Paragraphs => vec![PASSAGE; count].join("\n\n"),
        LoremUnit::Sentences => {
            let sentences: Vec<&str> = PASSAGE
                .split(". ")
                .map(|s| s.trim_end_matches('.'))
                .collect();
            let picked: Vec<&str> = sentences.iter().copied().cycle().take(count).collect();
            format!("{}.", picked.join(". "))
        }
        LoremUnit::Words => {
            let words: Vec<&str> = PASSAGE.split(' ').collect();
            let picked: Vec<&str> = words.iter().copied().cycle().take(count).collect();
            picked.join(" ")
        }
    }
}

/// Lorem ipsum generator tool.
pub struct LoremIpsumTool;

impl LoremIpsumTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "lorem_ipsum";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate lorem ipsum placeholder text as a number of paragraphs, sentences or words (1-100).";

    #[instrument(skip_all, fields(count = params.count, unit = ?params.unit))]
    pub fn execute(params: &LoremIpsumParams) -> CallToolResult {
        let count = params.count.clamp(MIN_COUNT, MAX_COUNT);
        info!("Generating {} lorem units", count);

        let output = LoremOutput {
            text: generate(count, params.unit),
            count,
            unit: params.unit,
        };
        structured_result(output.text.clone(), &output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<LoremIpsumParams>().into(),
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
                let params: LoremIpsumParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
