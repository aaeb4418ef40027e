//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// How to drive the toolbox over MCP (static Markdown).
pub struct DocsReadmeResource;

impl ResourceDefinition for DocsReadmeResource {
    const URI: &'static str = "toolly://docs/readme";
    const NAME: &'static str = "Toolly Guide";
    const DESCRIPTION: &'static str = "How tools, pages and preferences are exposed";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(DOCUMENTATION.to_string())
    }
}

const DOCUMENTATION: &str = r#"# Toolly.online

Every widget on the site is available as an MCP tool.

## Tools

- Text: `word_counter`, `lorem_ipsum`, `markdown_preview`, `emoji_converter`
- Developer: `json_formatter`, `base64`, `code_minifier`, `color_picker`
- Utility: `password_generator`, `qr_code_generator`, `url_shortener`, `stopwatch`, `ip_info`, `notepad`
- Media: `image_compressor`, `image_to_pdf`
- AI: `ai_image_generator`, `text_to_speech`, `speech_to_text`

Images and documents travel as `data:` URLs, both ways.

## Resources

- `toolly://catalog`: every tool record and the MCP tool behind it
- `toolly://favorites`: favorite tool ids
- `toolly://tools/{slug}`: the page view of one tool
- `toolly://server/info`: version and counts

## HTTP

`GET /{slug}` returns a tool page and `POST /{slug}` runs its widget with a JSON body.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_readme_metadata() {
        assert_eq!(DocsReadmeResource::URI, "toolly://docs/readme");
        assert_eq!(DocsReadmeResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_docs_readme_content() {
        match DocsReadmeResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.contains("json_formatter"));
                assert!(text.contains("toolly://tools/{slug}"));
            }
            _ => panic!("Expected Text content"),
        }
    }
}
