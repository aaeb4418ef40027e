//! Tools backed by generative AI or speech services.

pub mod ai_image;
pub mod speech_to_text;
pub mod text_to_speech;

pub use ai_image::{AiImageParams, AiImageTool};
pub use speech_to_text::{RecognitionEvent, RecognitionResult, SpeechToTextParams, SpeechToTextTool};
pub use text_to_speech::{TextToSpeechParams, TextToSpeechTool};
