//! Developer tools.

pub mod base64;
pub mod color_picker;
pub mod json_format;
pub mod minifier;

pub use base64::{Base64Mode, Base64Params, Base64Tool};
pub use color_picker::{ColorPickerParams, ColorPickerTool, Rgb};
pub use json_format::{JsonFormatterParams, JsonFormatterTool, JsonMode};
pub use minifier::{MinifierParams, MinifierTool, MinifyLanguage};
