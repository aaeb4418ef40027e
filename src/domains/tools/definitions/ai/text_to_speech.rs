//! Text to speech tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::ai::{AiClient, AudioBuffer, Voice, decode_pcm};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;

/// Parameters for the text to speech tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextToSpeechParams {
    /// Text to speak.
    #[serde(default)]
    pub text: String,

    /// Kore, Puck or Zephyr.
    #[serde(default)]
    pub voice: Voice,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SpeechOutput {
    /// WAV as a `data:audio/wav;base64,` URL.
    pub audio_data_url: String,
    pub duration_secs: f64,
    pub sample_rate: u32,
    pub voice: Voice,
}

impl SpeechOutput {
    fn from_buffer(buffer: &AudioBuffer, voice: Voice) -> Self {
        Self {
            audio_data_url: buffer.to_wav_data_url(),
            duration_secs: buffer.duration_secs(),
            sample_rate: buffer.sample_rate,
            voice,
        }
    }
}

/// Synthesize `params.text` through `client` into playable audio.
pub async fn synthesize(client: &AiClient, params: &TextToSpeechParams) -> Result<SpeechOutput, ToolError> {
    let text = params.text.trim();
    if text.is_empty() {
        return Err(ToolError::invalid_arguments("Enter some text to speak"));
    }

    let payload = client
        .synthesize_speech(text, params.voice)
        .await
        .map_err(|e| ToolError::execution_failed(e.to_string()))?;
    let buffer = decode_pcm(&payload).map_err(|e| ToolError::execution_failed(e.to_string()))?;
    info!("Decoded {:.2}s of audio", buffer.duration_secs());

    Ok(SpeechOutput::from_buffer(&buffer, params.voice))
}

/// Text to speech tool.
pub struct TextToSpeechTool;

impl TextToSpeechTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "text_to_speech";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Turn text into a spoken voiceover with a generative AI voice (Kore, Puck or Zephyr). Returns a WAV data URL.";

    #[instrument(skip_all, fields(voice = params.voice.as_str()))]
    pub async fn execute(params: &TextToSpeechParams, ctx: &ToolContext) -> CallToolResult {
        into_call_result(synthesize(&ctx.ai, params).await, |out| {
            format!("AI voiceover ready ({:.1}s, voice {})", out.duration_secs, out.voice.as_str())
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<TextToSpeechParams>().into(),
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
                let params: TextToSpeechParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &context).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_from_buffer() {
        let buffer = AudioBuffer {
            sample_rate: 24_000,
            channels: 1,
            samples: vec![0.0; 48_000],
        };
        let out = SpeechOutput::from_buffer(&buffer, Voice::Zephyr);
        assert!((out.duration_secs - 2.0).abs() < f64::EPSILON);
        assert!(out.audio_data_url.starts_with("data:audio/wav;base64,"));
        assert_eq!(serde_json::to_value(&out).unwrap()["voice"], "Zephyr");
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let ctx = ToolContext::for_tests();
        let params = TextToSpeechParams {
            text: String::new(),
            voice: Voice::Kore,
        };
        assert!(synthesize(&ctx.ai, &params).await.is_err());
    }

    #[tokio::test]
    async fn test_without_key() {
        let ctx = ToolContext::for_tests();
        let params = TextToSpeechParams {
            text: "Welcome to Toolly.online!".to_string(),
            voice: Voice::Puck,
        };
        let result = TextToSpeechTool::execute(&params, &ctx).await;
        assert!(result.is_error.unwrap_or(false));
    }
}
