//! Widget dispatch table.
//!
//! Every catalog record id maps to at most one widget. The set of widgets is
//! closed and known at compile time, so the mapping is a plain enum plus a
//! lookup table rather than a map of boxed handlers.

use serde_json::{Map, Value};

use super::definitions::{
    AiImageTool, Base64Tool, ColorPickerTool, EmojiConverterTool, ImageCompressorTool,
    ImageToPdfTool, IpInfoTool, JsonFormatterTool, LoremIpsumTool, MarkdownPreviewTool,
    MinifierTool, MinifyLanguage, NotepadTool, PasswordGeneratorTool, QrCodeTool,
    SpeechToTextTool, StopwatchTool, TextToSpeechTool, UrlShortenerTool, WordCounterTool,
};

/// A tool implementation that a catalog record can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    QrCode,
    AiImage,
    UrlShortener,
    JsonFormatter,
    PasswordGenerator,
    ImageCompressor,
    TextToSpeech,
    WordCounter,
    ColorPicker,
    LoremIpsum,
    MarkdownPreview,
    Base64,
    Stopwatch,
    IpInfo,
    Minifier(MinifyLanguage),
    EmojiConverter,
    Notepad,
    SpeechToText,
    ImageToPdf,
}

/// Catalog id to widget table.
const WIDGET_TABLE: &[(&str, Widget)] = &[
    ("qr-gen", Widget::QrCode),
    ("ai-img", Widget::AiImage),
    ("url-short", Widget::UrlShortener),
    ("json-format", Widget::JsonFormatter),
    ("pw-gen", Widget::PasswordGenerator),
    ("img-comp", Widget::ImageCompressor),
    ("txt-speech", Widget::TextToSpeech),
    ("word-count", Widget::WordCounter),
    ("color-picker", Widget::ColorPicker),
    ("lorem-gen", Widget::LoremIpsum),
    ("md-editor", Widget::MarkdownPreview),
    ("b64-tool", Widget::Base64),
    ("stopwatch", Widget::Stopwatch),
    ("ip-info", Widget::IpInfo),
    ("html-min", Widget::Minifier(MinifyLanguage::Html)),
    ("css-min", Widget::Minifier(MinifyLanguage::Css)),
    ("js-min", Widget::Minifier(MinifyLanguage::Js)),
    ("emoji-conv", Widget::EmojiConverter),
    ("notepad", Widget::Notepad),
    ("speech-text", Widget::SpeechToText),
    ("img-pdf", Widget::ImageToPdf),
];

impl Widget {
    /// Find the widget bound to a catalog id.
    pub fn for_tool_id(id: &str) -> Option<Widget> {
        WIDGET_TABLE
            .iter()
            .find(|(tool_id, _)| *tool_id == id)
            .map(|(_, widget)| *widget)
    }

    /// Name of the MCP tool that implements this widget.
    pub fn tool_name(self) -> &'static str {
        match self {
            Widget::QrCode => QrCodeTool::NAME,
            Widget::AiImage => AiImageTool::NAME,
            Widget::UrlShortener => UrlShortenerTool::NAME,
            Widget::JsonFormatter => JsonFormatterTool::NAME,
            Widget::PasswordGenerator => PasswordGeneratorTool::NAME,
            Widget::ImageCompressor => ImageCompressorTool::NAME,
            Widget::TextToSpeech => TextToSpeechTool::NAME,
            Widget::WordCounter => WordCounterTool::NAME,
            Widget::ColorPicker => ColorPickerTool::NAME,
            Widget::LoremIpsum => LoremIpsumTool::NAME,
            Widget::MarkdownPreview => MarkdownPreviewTool::NAME,
            Widget::Base64 => Base64Tool::NAME,
            Widget::Stopwatch => StopwatchTool::NAME,
            Widget::IpInfo => IpInfoTool::NAME,
            Widget::Minifier(_) => MinifierTool::NAME,
            Widget::EmojiConverter => EmojiConverterTool::NAME,
            Widget::Notepad => NotepadTool::NAME,
            Widget::SpeechToText => SpeechToTextTool::NAME,
            Widget::ImageToPdf => ImageToPdfTool::NAME,
        }
    }

    /// Merge the widget's fixed arguments into caller-supplied ones.
    ///
    /// The three minifier records share one tool; the record decides the
    /// language, overriding whatever the caller sent.
    pub fn bind_arguments(self, arguments: Value) -> Value {
        let mut map = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => return other,
        };

        if let Widget::Minifier(language) = self {
            map.insert(
                "language".to_string(),
                Value::String(language.as_str().to_string()),
            );
        }

        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::builtin_records;

    #[test]
    fn test_lookup() {
        assert_eq!(Widget::for_tool_id("pw-gen"), Some(Widget::PasswordGenerator));
        assert_eq!(
            Widget::for_tool_id("css-min"),
            Some(Widget::Minifier(MinifyLanguage::Css))
        );
        assert_eq!(Widget::for_tool_id("video-conv"), None);
    }

    #[test]
    fn test_every_table_id_is_a_catalog_record() {
        let records = builtin_records();
        for (id, _) in WIDGET_TABLE {
            assert!(records.iter().any(|r| r.id == *id), "{id} not in catalog");
        }
    }

    #[test]
    fn test_bind_arguments_sets_minifier_language() {
        let widget = Widget::Minifier(MinifyLanguage::Js);
        let bound = widget.bind_arguments(serde_json::json!({ "input": "a", "language": "css" }));
        assert_eq!(bound["language"], "js");
        assert_eq!(bound["input"], "a");

        let bound = Widget::Base64.bind_arguments(serde_json::Value::Null);
        assert_eq!(bound, serde_json::json!({}));
    }
}
