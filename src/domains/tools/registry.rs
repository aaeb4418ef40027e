//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls and widget pages (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;
#[cfg(feature = "http")]
use rmcp::model::CallToolResult;
#[cfg(feature = "http")]
use serde_json::Value;
#[cfg(feature = "http")]
use tracing::warn;

use super::context::ToolContext;
#[cfg(feature = "http")]
use super::definitions::common::parse_params;
#[cfg(feature = "http")]
use super::{ToolError, Widget};
use super::definitions::{
    AiImageTool, Base64Tool, ColorPickerTool, EmojiConverterTool, ImageCompressorTool,
    ImageToPdfTool, IpInfoTool, JsonFormatterTool, LoremIpsumTool, MarkdownPreviewTool,
    MinifierTool, NotepadTool, PasswordGeneratorTool, QrCodeTool, SpeechToTextTool,
    StopwatchTool, TextToSpeechTool, UrlShortenerTool, WordCounterTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    context: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self { context }
    }

    /// Shared tool context.
    pub fn context(&self) -> &Arc<ToolContext> {
        &self.context
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AiImageTool::NAME,
            Base64Tool::NAME,
            ColorPickerTool::NAME,
            EmojiConverterTool::NAME,
            ImageCompressorTool::NAME,
            ImageToPdfTool::NAME,
            IpInfoTool::NAME,
            JsonFormatterTool::NAME,
            LoremIpsumTool::NAME,
            MarkdownPreviewTool::NAME,
            MinifierTool::NAME,
            NotepadTool::NAME,
            PasswordGeneratorTool::NAME,
            QrCodeTool::NAME,
            SpeechToTextTool::NAME,
            StopwatchTool::NAME,
            TextToSpeechTool::NAME,
            UrlShortenerTool::NAME,
            WordCounterTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AiImageTool::to_tool(),
            Base64Tool::to_tool(),
            ColorPickerTool::to_tool(),
            EmojiConverterTool::to_tool(),
            ImageCompressorTool::to_tool(),
            ImageToPdfTool::to_tool(),
            IpInfoTool::to_tool(),
            JsonFormatterTool::to_tool(),
            LoremIpsumTool::to_tool(),
            MarkdownPreviewTool::to_tool(),
            MinifierTool::to_tool(),
            NotepadTool::to_tool(),
            PasswordGeneratorTool::to_tool(),
            QrCodeTool::to_tool(),
            SpeechToTextTool::to_tool(),
            StopwatchTool::to_tool(),
            TextToSpeechTool::to_tool(),
            UrlShortenerTool::to_tool(),
            WordCounterTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Argument errors are returned as `Err`; failures inside a tool come
    /// back as a result with `is_error` set.
    #[cfg(feature = "http")]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let ctx = self.context.as_ref();
        let result = match name {
            AiImageTool::NAME => AiImageTool::execute(&parse_params(arguments)?, ctx).await,
            Base64Tool::NAME => Base64Tool::execute(&parse_params(arguments)?),
            ColorPickerTool::NAME => ColorPickerTool::execute(&parse_params(arguments)?),
            EmojiConverterTool::NAME => EmojiConverterTool::execute(&parse_params(arguments)?),
            ImageCompressorTool::NAME => ImageCompressorTool::run(parse_params(arguments)?).await,
            ImageToPdfTool::NAME => ImageToPdfTool::run(parse_params(arguments)?).await,
            IpInfoTool::NAME => IpInfoTool::execute(&parse_params(arguments)?, ctx).await,
            JsonFormatterTool::NAME => JsonFormatterTool::execute(&parse_params(arguments)?),
            LoremIpsumTool::NAME => LoremIpsumTool::execute(&parse_params(arguments)?),
            MarkdownPreviewTool::NAME => MarkdownPreviewTool::execute(&parse_params(arguments)?),
            MinifierTool::NAME => MinifierTool::execute(&parse_params(arguments)?),
            NotepadTool::NAME => NotepadTool::execute(&parse_params(arguments)?, ctx),
            PasswordGeneratorTool::NAME => PasswordGeneratorTool::execute(&parse_params(arguments)?),
            QrCodeTool::NAME => QrCodeTool::execute(&parse_params(arguments)?),
            SpeechToTextTool::NAME => SpeechToTextTool::execute(&parse_params(arguments)?, ctx),
            StopwatchTool::NAME => StopwatchTool::execute(&parse_params(arguments)?, ctx),
            TextToSpeechTool::NAME => TextToSpeechTool::execute(&parse_params(arguments)?, ctx).await,
            UrlShortenerTool::NAME => UrlShortenerTool::execute(&parse_params(arguments)?, &ctx.config),
            WordCounterTool::NAME => WordCounterTool::execute(&parse_params(arguments)?),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        Ok(result)
    }

    /// Run the widget behind a tool page.
    #[cfg(feature = "http")]
    pub async fn call_widget(&self, widget: Widget, arguments: Value) -> Result<CallToolResult, ToolError> {
        self.call_tool(widget.tool_name(), widget.bind_arguments(arguments))
            .await
    }
}
