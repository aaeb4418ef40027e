//! AI image generator tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::ai::{AiClient, AspectRatio};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;

/// Parameters for the AI image tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AiImageParams {
    /// What to draw.
    #[serde(default)]
    pub prompt: String,

    /// `1:1`, `16:9` or `9:16`.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct GeneratedImage {
    pub data_url: String,
    pub aspect_ratio: AspectRatio,
    pub file_name: String,
}

/// Generate an image through `client`.
pub async fn generate(client: &AiClient, params: &AiImageParams) -> Result<GeneratedImage, ToolError> {
    let prompt = params.prompt.trim();
    if prompt.is_empty() {
        return Err(ToolError::invalid_arguments("Enter a prompt to generate an image"));
    }

    let data_url = client
        .generate_image(prompt, params.aspect_ratio)
        .await
        .map_err(|e| ToolError::execution_failed(e.to_string()))?;

    Ok(GeneratedImage {
        data_url,
        aspect_ratio: params.aspect_ratio,
        file_name: "ai-image.png".to_string(),
    })
}

/// AI image generator tool.
pub struct AiImageTool;

impl AiImageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ai_image_generator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate an image from a text prompt with a generative AI model. Aspect ratio can be 1:1, 16:9 or 9:16.";

    #[instrument(skip_all, fields(ratio = %params.aspect_ratio))]
    pub async fn execute(params: &AiImageParams, ctx: &ToolContext) -> CallToolResult {
        into_call_result(generate(&ctx.ai, params).await, |image| {
            format!("Generated a {} image", image.aspect_ratio)
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<AiImageParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(context: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let context = context.clone();
            async move {
                let params: AiImageParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &context).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let ctx = ToolContext::for_tests();
        let params = AiImageParams {
            prompt: "   ".to_string(),
            aspect_ratio: AspectRatio::Square,
        };
        let err = generate(&ctx.ai, &params).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_missing_key_is_shown_inline() {
        let ctx = ToolContext::for_tests();
        let params: AiImageParams =
            serde_json::from_value(serde_json::json!({ "prompt": "a lighthouse", "aspect_ratio": "16:9" }))
                .unwrap();
        assert_eq!(params.aspect_ratio, AspectRatio::Landscape);

        let result = AiImageTool::execute(&params, &ctx).await;
        assert!(result.is_error.unwrap_or(false));
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("API key is missing"));
    }
}
