//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; tools that need shared
//! state receive the tool context.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::context::ToolContext;
use super::definitions::{
    AiImageTool, Base64Tool, ColorPickerTool, EmojiConverterTool, ImageCompressorTool,
    ImageToPdfTool, IpInfoTool, JsonFormatterTool, LoremIpsumTool, MarkdownPreviewTool,
    MinifierTool, NotepadTool, PasswordGeneratorTool, QrCodeTool, SpeechToTextTool,
    StopwatchTool, TextToSpeechTool, UrlShortenerTool, WordCounterTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AiImageTool::create_route(context.clone()))
        .with_route(Base64Tool::create_route())
        .with_route(ColorPickerTool::create_route())
        .with_route(EmojiConverterTool::create_route())
        .with_route(ImageCompressorTool::create_route())
        .with_route(ImageToPdfTool::create_route())
        .with_route(IpInfoTool::create_route(context.clone()))
        .with_route(JsonFormatterTool::create_route())
        .with_route(LoremIpsumTool::create_route())
        .with_route(MarkdownPreviewTool::create_route())
        .with_route(MinifierTool::create_route())
        .with_route(NotepadTool::create_route(context.clone()))
        .with_route(PasswordGeneratorTool::create_route())
        .with_route(QrCodeTool::create_route())
        .with_route(SpeechToTextTool::create_route(context.clone()))
        .with_route(StopwatchTool::create_route(context.clone()))
        .with_route(TextToSpeechTool::create_route(context.clone()))
        .with_route(UrlShortenerTool::create_route(context.config.clone()))
        .with_route(WordCounterTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(ToolContext::for_tests());
        let tools = router.list_all();
        assert_eq!(tools.len(), 19);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"qr_code_generator"));
        assert!(names.contains(&"stopwatch"));
        assert!(names.contains(&"image_to_pdf"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let context = ToolContext::for_tests();
        let registry = ToolRegistry::new(context.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(context);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
