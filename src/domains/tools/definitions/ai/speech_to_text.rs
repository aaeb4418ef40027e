//! Speech to text tool definition.
//!
//! Recognition itself runs on the client. The client forwards the recognizer's
//! result events and this tool folds them into a transcript keyed by result
//! index, the same way a continuous recognizer with interim results reports
//! them: each event restates every result from `result_index` onwards.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::super::common::{into_call_result, parse_route_params};
use crate::domains::tools::ToolError;
use crate::domains::tools::context::ToolContext;

/// One recognition alternative as reported by the recognizer.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RecognitionResult {
    pub transcript: String,
    #[serde(default)]
    pub is_final: bool,
}

/// A result event: the full result list plus the first index that changed.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecognitionEvent {
    #[serde(default)]
    pub result_index: usize,
    pub results: Vec<RecognitionResult>,
}

/// Transcript segments keyed by result index.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    segments: BTreeMap<usize, RecognitionResult>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Results before `result_index` are left untouched.
    pub fn apply(&mut self, event: &RecognitionEvent) {
        for (index, result) in event.results.iter().enumerate().skip(event.result_index) {
            self.segments.insert(index, result.clone());
        }
    }

    /// Interim and final segments joined in index order.
    pub fn text(&self) -> String {
        self.segments.values().map(|s| s.transcript.as_str()).collect()
    }

    /// Only the segments the recognizer has committed.
    pub fn final_text(&self) -> String {
        self.segments
            .values()
            .filter(|s| s.is_final)
            .map(|s| s.transcript.as_str())
            .collect()
    }

    pub fn is_final(&self) -> bool {
        !self.segments.is_empty() && self.segments.values().all(|s| s.is_final)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Parameters for the speech to text tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SpeechToTextParams {
    /// Recognition events in the order they were received.
    #[serde(default)]
    pub events: Vec<RecognitionEvent>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TranscriptOutput {
    pub transcript: String,
    pub final_transcript: String,
    pub segments: usize,
    pub is_final: bool,
}

/// Fold `events` into a transcript if recognition is enabled.
pub fn transcribe(enabled: bool, events: &[RecognitionEvent]) -> Result<TranscriptOutput, ToolError> {
    if !enabled {
        return Err(ToolError::unsupported(
            "Speech recognition is not available on this server.",
        ));
    }

    let mut transcript = Transcript::new();
    for event in events {
        transcript.apply(event);
    }
    debug!("Folded {} events into {} segments", events.len(), transcript.len());

    Ok(TranscriptOutput {
        transcript: transcript.text(),
        final_transcript: transcript.final_text(),
        segments: transcript.len(),
        is_final: transcript.is_final(),
    })
}

/// Speech to text tool.
pub struct SpeechToTextTool;

impl SpeechToTextTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "speech_to_text";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Assemble a transcript from speech recognition result events (result index plus interim/final segments).";

    #[instrument(skip_all, fields(events = params.events.len()))]
    pub fn execute(params: &SpeechToTextParams, ctx: &ToolContext) -> CallToolResult {
        let outcome = transcribe(ctx.config.features.speech_recognition, &params.events);
        into_call_result(outcome, |out| out.transcript.clone())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SpeechToTextParams>().into(),
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
                let params: SpeechToTextParams = parse_route_params(args)?;
                Ok(Self::execute(&params, &context))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str, is_final: bool) -> RecognitionResult {
        RecognitionResult {
            transcript: text.to_string(),
            is_final,
        }
    }

    fn event(result_index: usize, results: Vec<RecognitionResult>) -> RecognitionEvent {
        RecognitionEvent {
            result_index,
            results,
        }
    }

    #[test]
    fn test_interim_results_are_replaced() {
        let events = vec![
            event(0, vec![result("hel", false)]),
            event(0, vec![result("hello", false)]),
            event(0, vec![result("hello world", true)]),
            event(1, vec![result("hello world", true), result(" how", false)]),
            event(1, vec![result("hello world", true), result(" how are you", true)]),
        ];
        let out = transcribe(true, &events).unwrap();
        assert_eq!(out.transcript, "hello world how are you");
        assert_eq!(out.final_transcript, "hello world how are you");
        assert_eq!(out.segments, 2);
        assert!(out.is_final);
    }

    #[test]
    fn test_interim_tail_excluded_from_final() {
        let events = vec![event(0, vec![result("one", true), result(" tw", false)])];
        let out = transcribe(true, &events).unwrap();
        assert_eq!(out.transcript, "one tw");
        assert_eq!(out.final_transcript, "one");
        assert!(!out.is_final);
    }

    #[test]
    fn test_earlier_results_survive_later_events() {
        let mut transcript = Transcript::new();
        transcript.apply(&event(0, vec![result("a", true)]));
        // An event starting at 1 never rewrites index 0, even if it restates it.
        transcript.apply(&event(1, vec![result("IGNORED", true), result("b", true)]));
        assert_eq!(transcript.text(), "ab");
    }

    #[test]
    fn test_unsupported_when_disabled() {
        let err = transcribe(false, &[]).unwrap_err();
        assert!(matches!(err, ToolError::Unsupported(_)));
    }

    #[test]
    fn test_execute_respects_feature_flag() {
        let mut config = crate::core::config::Config::default();
        config.features.speech_recognition = false;
        let ctx = ToolContext::new(
            Arc::new(config),
            Arc::new(crate::core::storage::MemoryStore::new()),
        );
        let result = SpeechToTextTool::execute(&SpeechToTextParams { events: vec![] }, &ctx);
        assert!(result.is_error.unwrap_or(false));
    }
}
