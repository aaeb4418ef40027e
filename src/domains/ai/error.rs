//! Error types for the generative AI shim.
//!
//! Every variant's message is written for the end user; tools show it as is.

use thiserror::Error;

/// Errors returned by [`super::AiClient`].
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured.
    #[error("API key is missing. Set TOOLLY_GEMINI_API_KEY and restart the server.")]
    MissingKey,

    /// The API rejected the key.
    #[error("Invalid API Key. Please double-check your configuration.")]
    InvalidKey,

    /// The key is valid but lacks access to the API.
    #[error(
        "Permission Denied. Make sure your Google Cloud project has the 'Generative Language API' enabled."
    )]
    PermissionDenied,

    /// The response carried no candidates or parts.
    #[error("The AI did not return any results. Try a different prompt.")]
    NoCandidates,

    /// Candidates were returned but none held an image.
    #[error(
        "API responded but no image was found. Your API key might not have permission for Image Generation."
    )]
    NoImage,

    /// Candidates were returned but none held audio.
    #[error("No audio data returned from the speech model.")]
    NoAudio,

    /// Any other non-success response.
    #[error("AI service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never got a response.
    #[error("Could not reach the AI service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload could not be decoded.
    #[error("Could not decode the AI response: {0}")]
    Decode(String),
}

impl AiError {
    /// Create a new decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Map a failed HTTP status and body onto the error taxonomy.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 || body.contains("API_KEY_INVALID") {
            return Self::InvalidKey;
        }
        if status == 403 {
            return Self::PermissionDenied;
        }

        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        Self::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(AiError::from_status(401, ""), AiError::InvalidKey));
        assert!(matches!(
            AiError::from_status(400, r#"{"error":{"status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#),
            AiError::InvalidKey
        ));
        assert!(matches!(AiError::from_status(403, "nope"), AiError::PermissionDenied));

        match AiError::from_status(429, r#"{"error":{"code":429,"message":"Quota exceeded"}}"#) {
            AiError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert!(AiError::PermissionDenied.to_string().contains("Generative Language API"));
        assert!(AiError::NoImage.to_string().contains("no image was found"));
    }
}
