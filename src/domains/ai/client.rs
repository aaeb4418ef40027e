//! Client for the generative language REST API.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::AiError;
use crate::core::config::Config;

/// Aspect ratios the image model accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [Self::Square, Self::Landscape, Self::Portrait];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s.trim())
            .ok_or_else(|| format!("Unsupported aspect ratio: {}", s))
    }
}

/// Prebuilt voices offered for speech.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum Voice {
    #[default]
    Kore,
    Puck,
    Zephyr,
}

impl Voice {
    pub fn as_str(self) -> &'static str {
        match self {
            Voice::Kore => "Kore",
            Voice::Puck => "Puck",
            Voice::Zephyr => "Zephyr",
        }
    }
}

// ============================================================================
// Response model (only the fields we read)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> Option<&[Part]> {
        self.candidates
            .first()?
            .content
            .as_ref()
            .map(|c| c.parts.as_slice())
            .filter(|parts| !parts.is_empty())
    }

    /// First inline payload of the first candidate, as a `data:` URL.
    pub fn image_data_url(&self) -> Result<String, AiError> {
        let parts = self.first_parts().ok_or(AiError::NoCandidates)?;
        parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| format!("data:{};base64,{}", inline.mime_type, inline.data))
            .ok_or(AiError::NoImage)
    }

    /// Base64 audio payload of the first candidate's first part.
    pub fn audio_payload(&self) -> Result<String, AiError> {
        self.first_parts()
            .and_then(|parts| parts.first())
            .and_then(|part| part.inline_data.as_ref())
            .map(|inline| inline.data.clone())
            .ok_or(AiError::NoAudio)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Thin wrapper over `models/{model}:generateContent`.
#[derive(Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    image_model: String,
    speech_model: String,
    api_key: Option<String>,
}

impl fmt::Debug for AiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiClient")
            .field("base_url", &self.base_url)
            .field("image_model", &self.image_model)
            .field("speech_model", &self.speech_model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AiClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.ai.base_url.clone(),
            image_model: config.ai.image_model.clone(),
            speech_model: config.ai.speech_model.clone(),
            api_key: config
                .credentials
                .gemini_api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        }
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    async fn generate_content(
        &self,
        model: &str,
        body: Value,
    ) -> Result<GenerateContentResponse, AiError> {
        let key = self.api_key.as_deref().ok_or(AiError::MissingKey)?;

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Generative API returned {}", status);
            return Err(AiError::from_status(status.as_u16(), &text));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AiError::decode(e.to_string()))
    }

    /// Generate an image and return it as a `data:` URL.
    #[instrument(skip(self, prompt), fields(model = %self.image_model))]
    pub async fn generate_image(&self, prompt: &str, ratio: AspectRatio) -> Result<String, AiError> {
        let body = image_request(prompt, ratio);
        let response = self.generate_content(&self.image_model, body).await?;
        let url = response.image_data_url()?;
        info!("Image generated ({} chars)", url.len());
        Ok(url)
    }

    /// Synthesize speech and return the base64 PCM payload.
    #[instrument(skip(self, text), fields(model = %self.speech_model, voice = voice.as_str()))]
    pub async fn synthesize_speech(&self, text: &str, voice: Voice) -> Result<String, AiError> {
        let body = speech_request(text, voice);
        let response = self.generate_content(&self.speech_model, body).await?;
        response.audio_payload()
    }
}

fn image_request(prompt: &str, ratio: AspectRatio) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "imageConfig": { "aspectRatio": ratio.as_str() }
        }
    })
}

fn speech_request(text: &str, voice: Voice) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": text }] }],
        "generationConfig": {
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": {
                    "prebuiltVoiceConfig": { "voiceName": voice.as_str() }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_image_from_second_part() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                    ]
                }
            }]
        }));
        assert_eq!(
            response.image_data_url().unwrap(),
            "data:image/png;base64,iVBORw0KGgo="
        );
    }

    #[test]
    fn test_missing_results() {
        assert!(matches!(
            parse(json!({})).image_data_url(),
            Err(AiError::NoCandidates)
        ));
        assert!(matches!(
            parse(json!({ "candidates": [{ "content": { "parts": [] } }] })).image_data_url(),
            Err(AiError::NoCandidates)
        ));
        assert!(matches!(
            parse(json!({ "candidates": [{ "content": { "parts": [{ "text": "no" }] } }] }))
                .image_data_url(),
            Err(AiError::NoImage)
        ));
        assert!(matches!(parse(json!({})).audio_payload(), Err(AiError::NoAudio)));
    }

    #[test]
    fn test_audio_payload() {
        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "audio/L16;rate=24000", "data": "AAAA" } }] }
            }]
        }));
        assert_eq!(response.audio_payload().unwrap(), "AAAA");
    }

    #[test]
    fn test_requests() {
        let body = image_request("a cat", AspectRatio::Landscape);
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "16:9");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "a cat");

        let body = speech_request("hi", Voice::Puck);
        assert_eq!(
            body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"],
            "Puck"
        );
    }

    #[test]
    fn test_aspect_ratio_parsing() {
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Portrait);
        assert!("4:3".parse::<AspectRatio>().is_err());
        assert_eq!(serde_json::to_value(AspectRatio::Landscape).unwrap(), "16:9");
    }

    #[tokio::test]
    async fn test_missing_key() {
        let client = AiClient::new(&Config::default(), reqwest::Client::new());
        assert!(!client.is_configured());
        let err = client
            .generate_image("a cat", AspectRatio::Square)
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingKey));
    }

    #[test]
    fn test_debug_redacts_key() {
        let mut config = Config::default();
        config.credentials.gemini_api_key = Some("secret-key".to_string());
        let client = AiClient::new(&config, reqwest::Client::new());
        assert!(client.is_configured());
        assert!(!format!("{:?}", client).contains("secret-key"));
        assert_eq!(
            client.endpoint("m"),
            "https://generativelanguage.googleapis.com/v1beta/models/m:generateContent"
        );
    }
}
