//! Generative AI service shim.
//!
//! Wraps the two calls the AI widgets make (image and speech generation) and
//! turns raw speech output into playable audio.

mod audio;
mod client;
mod error;

pub use audio::{AudioBuffer, SPEECH_SAMPLE_RATE, decode_pcm};
pub use client::{AiClient, AspectRatio, GenerateContentResponse, Voice};
pub use error::AiError;
