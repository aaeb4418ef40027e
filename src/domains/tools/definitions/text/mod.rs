//! Text tools.

pub mod emoji;
pub mod lorem_ipsum;
pub mod markdown;
pub mod word_counter;

pub use emoji::{EmojiConverterParams, EmojiConverterTool};
pub use lorem_ipsum::{LoremIpsumParams, LoremIpsumTool, LoremUnit};
pub use markdown::{MarkdownPreviewParams, MarkdownPreviewTool, escape_html};
pub use word_counter::{TextStats, WordCounterParams, WordCounterTool};
