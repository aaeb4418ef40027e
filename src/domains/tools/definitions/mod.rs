//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by the kind of work it does.

pub mod ai;
pub mod common;
pub mod dev;
pub mod media;
pub mod text;
pub mod utility;

pub use ai::{
    AiImageParams, AiImageTool, SpeechToTextParams, SpeechToTextTool, TextToSpeechParams,
    TextToSpeechTool,
};
pub use dev::{
    Base64Params, Base64Tool, ColorPickerParams, ColorPickerTool, JsonFormatterParams,
    JsonFormatterTool, MinifierParams, MinifierTool, MinifyLanguage,
};
pub use media::{ImageCompressorParams, ImageCompressorTool, ImageToPdfParams, ImageToPdfTool};
pub use text::{
    EmojiConverterParams, EmojiConverterTool, LoremIpsumParams, LoremIpsumTool,
    MarkdownPreviewParams, MarkdownPreviewTool, WordCounterParams, WordCounterTool,
};
pub use utility::{
    IpInfoParams, IpInfoTool, NotepadParams, NotepadTool, PasswordGeneratorParams,
    PasswordGeneratorTool, QrCodeParams, QrCodeTool, Stopwatch, StopwatchParams, StopwatchTool,
    UrlShortenerParams, UrlShortenerTool,
};
