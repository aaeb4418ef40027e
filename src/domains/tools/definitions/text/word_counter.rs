//! Word counter tool definition.
//!
//! Reports word, character and sentence counts plus an estimated reading time.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{parse_route_params, structured_result};

/// Words read per minute when estimating reading time.
const WORDS_PER_MINUTE: usize = 200;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the word counter tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WordCounterParams {
    /// Text to analyse.
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Counts for a block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TextStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// Characters including whitespace.
    pub characters: usize,
    /// Characters excluding whitespace.
    pub characters_no_spaces: usize,
    /// Non-empty segments between runs of `.`, `!` or `?`. A whitespace-only
    /// tail after the last mark counts as a segment.
    pub sentences: usize,
    /// Estimated reading time in whole minutes.
    pub reading_time_minutes: usize,
}

impl TextStats {
    /// Compute statistics for `text`.
    pub fn of(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|segment| !segment.is_empty())
            .count();

        Self {
            words,
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            sentences,
            reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Word counter tool.
pub struct WordCounterTool;

impl WordCounterTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "word_counter";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Count words, characters (with and without spaces) and sentences in a text, and estimate its reading time.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(len = params.text.len()))]
    pub fn execute(params: &WordCounterParams) -> CallToolResult {
        let stats = TextStats::of(&params.text);
        info!("Counted {} words", stats.words);

        let summary = format!(
            "{} words, {} characters, {} sentences, {}m read",
            stats.words, stats.characters, stats.sentences, stats.reading_time_minutes
        );
        structured_result(summary, &stats)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<WordCounterParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<TextStats>().into()),
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
                let params: WordCounterParams = parse_route_params(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::of("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.reading_time_minutes, 0);
    }

    #[test]
    fn test_counts() {
        let stats = TextStats::of("Hello world. How are you?  Fine!");
        assert_eq!(stats.words, 6);
        assert_eq!(stats.characters, 32);
        assert_eq!(stats.characters_no_spaces, 26);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.reading_time_minutes, 1);
    }

    #[test]
    fn test_sentence_segments() {
        assert_eq!(TextStats::of("Hello world.").sentences, 1);
        assert_eq!(TextStats::of("Hello world. ").sentences, 2);
        assert_eq!(TextStats::of("One. Two.   ").sentences, 3);
        assert_eq!(TextStats::of("Wait...what?!").sentences, 2);
        assert_eq!(TextStats::of("...!?").sentences, 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(TextStats::of(&text).reading_time_minutes, 2);
        let text = "word ".repeat(200);
        assert_eq!(TextStats::of(&text).reading_time_minutes, 1);
    }

    #[test]
    fn test_execute_structured_output() {
        let result = WordCounterTool::execute(&WordCounterParams {
            text: "a b c".to_string(),
        });
        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["words"], 3);
        assert_eq!(structured["characters_no_spaces"], 3);
    }
}
