//! Raw PCM decoding for synthesized speech.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::AiError;

/// Sample rate of the speech model's output.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Decoded mono audio with samples normalised to [-1.0, 1.0).
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<f32>,
}

impl AudioBuffer {
    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    /// Encode as a 16-bit PCM WAV file.
    pub fn to_wav(&self) -> Vec<u8> {
        let bits_per_sample: u16 = 16;
        let block_align = self.channels * bits_per_sample / 8;
        let byte_rate = self.sample_rate * block_align as u32;
        let data_len = (self.samples.len() * 2) as u32;

        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&self.channels.to_le_bytes());
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&block_align.to_le_bytes());
        out.extend_from_slice(&bits_per_sample.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for sample in &self.samples {
            let value = (sample.clamp(-1.0, 1.0) * 32768.0).clamp(-32768.0, 32767.0) as i16;
            out.extend_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// The WAV encoding as a `data:audio/wav;base64,` URL.
    pub fn to_wav_data_url(&self) -> String {
        format!("data:audio/wav;base64,{}", STANDARD.encode(self.to_wav()))
    }
}

/// Decode base64 16-bit little-endian mono PCM at 24 kHz.
pub fn decode_pcm(payload: &str) -> Result<AudioBuffer, AiError> {
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| AiError::decode(format!("invalid base64 audio: {}", e)))?;
    if bytes.len() % 2 != 0 {
        return Err(AiError::decode("PCM payload has an odd number of bytes"));
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    Ok(AudioBuffer {
        sample_rate: SPEECH_SAMPLE_RATE,
        channels: 1,
        samples,
    })
}
