//! Configuration management for the Toolly server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the Toolly server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Public site settings used for canonical and share links.
    pub site: SiteConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Key-value storage configuration.
    pub storage: StorageConfig,

    /// Admin dashboard configuration.
    pub admin: AdminConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Generative AI endpoint configuration.
    pub ai: AiConfig,

    /// Outbound network lookups.
    pub network: NetworkConfig,

    /// Platform capability switches.
    pub features: FeaturesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Public site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL without trailing slash (e.g. "https://toolly.online").
    pub base_url: String,

    /// Brand name shown in page chrome.
    pub brand: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the key-value store.
    /// If None, an in-memory store is used and nothing survives a restart.
    pub path: Option<PathBuf>,
}

/// Admin dashboard configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Username accepted by the configured authenticator (compared case-insensitively).
    pub username: Option<String>,

    /// Password accepted by the configured authenticator.
    pub password: Option<String>,

    /// Failed attempts allowed before the login is locked.
    pub max_attempts: u32,

    /// How long a lockout lasts, in minutes.
    pub lockout_minutes: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("max_attempts", &self.max_attempts)
            .field("lockout_minutes", &self.lockout_minutes)
            .finish()
    }
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Gemini API key for image and speech generation.
    pub gemini_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Generative AI endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Base URL of the generative language API.
    pub base_url: String,

    /// Model used for text-to-image requests.
    pub image_model: String,

    /// Model used for text-to-speech requests.
    pub speech_model: String,
}

/// Outbound network lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Endpoint returning IP geolocation JSON.
    pub ip_lookup_url: String,
}

/// Platform capability switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Whether clients may stream speech recognition results to the server.
    pub speech_recognition: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://toolly.online".to_string(),
            brand: "Toolly.online".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            // No credentials by default: the dashboard stays locked until configured
            username: None,
            password: None,
            max_attempts: 5,
            lockout_minutes: 15,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            speech_model: "gemini-2.5-flash-preview-tts".to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ip_lookup_url: "https://ipapi.co/json/".to_string(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            speech_recognition: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolly".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            site: SiteConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            storage: StorageConfig::default(),
            admin: AdminConfig::default(),
            credentials: CredentialsConfig::default(),
            ai: AiConfig::default(),
            network: NetworkConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `TOOLLY_`.
    /// For example: `TOOLLY_SERVER_NAME`, `TOOLLY_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLLY_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOLLY_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("TOOLLY_BASE_URL") {
            config.site.base_url = base_url.trim_end_matches('/').to_string();
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(path) = std::env::var("TOOLLY_STORAGE_PATH") {
            config.storage.path = Some(PathBuf::from(path));
        }

        // Admin credentials
        config.admin.username = std::env::var("TOOLLY_ADMIN_USERNAME").ok();
        config.admin.password = std::env::var("TOOLLY_ADMIN_PASSWORD").ok();

        if let Ok(max_attempts) = std::env::var("TOOLLY_ADMIN_MAX_ATTEMPTS") {
            config.admin.max_attempts = max_attempts.parse().unwrap_or(5);
        }

        if let Ok(minutes) = std::env::var("TOOLLY_ADMIN_LOCKOUT_MINUTES") {
            config.admin.lockout_minutes = minutes.parse().unwrap_or(15);
        }

        // Load Gemini API key
        if let Ok(api_key) = std::env::var("TOOLLY_GEMINI_API_KEY") {
            config.credentials.gemini_api_key = Some(api_key);
        }

        if let Ok(base_url) = std::env::var("TOOLLY_AI_BASE_URL") {
            config.ai.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(model) = std::env::var("TOOLLY_AI_IMAGE_MODEL") {
            config.ai.image_model = model;
        }

        if let Ok(model) = std::env::var("TOOLLY_AI_SPEECH_MODEL") {
            config.ai.speech_model = model;
        }

        if let Ok(url) = std::env::var("TOOLLY_IP_LOOKUP_URL") {
            config.network.ip_lookup_url = url;
        }

        if let Ok(enabled) = std::env::var("TOOLLY_SPEECH_RECOGNITION") {
            config.features.speech_recognition = enabled.parse().unwrap_or(true);
        }

        config
    }

    /// Features that are off because their settings are missing.
    ///
    /// `from_env` runs before logging is set up, so the caller logs these
    /// once the subscriber is installed.
    pub fn startup_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.storage.path.is_none() {
            warnings.push("TOOLLY_STORAGE_PATH not set - favorites, theme and notepad are kept in memory");
        }
        if self.admin.username.is_none() || self.admin.password.is_none() {
            warnings.push("Admin credentials not configured - admin login is disabled");
        }
        if self.credentials.gemini_api_key.is_none() {
            warnings.push("TOOLLY_GEMINI_API_KEY not set - AI image and speech tools will report a missing key");
        }
        if !self.features.speech_recognition {
            warnings.push("Speech recognition disabled - speech_to_text reports unsupported");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLLY_GEMINI_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.gemini_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("TOOLLY_GEMINI_API_KEY");
        }
    }

    #[test]
    fn test_admin_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLLY_ADMIN_USERNAME", "operator");
            std::env::set_var("TOOLLY_ADMIN_PASSWORD", "s3cret");
            std::env::set_var("TOOLLY_ADMIN_MAX_ATTEMPTS", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.admin.username.as_deref(), Some("operator"));
        assert_eq!(config.admin.password.as_deref(), Some("s3cret"));
        assert_eq!(config.admin.max_attempts, 3);
        unsafe {
            std::env::remove_var("TOOLLY_ADMIN_USERNAME");
            std::env::remove_var("TOOLLY_ADMIN_PASSWORD");
            std::env::remove_var("TOOLLY_ADMIN_MAX_ATTEMPTS");
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLLY_BASE_URL", "https://tools.example.com/");
        }
        let config = Config::from_env();
        assert_eq!(config.site.base_url, "https://tools.example.com");
        unsafe {
            std::env::remove_var("TOOLLY_BASE_URL");
        }
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let creds = CredentialsConfig {
            gemini_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));

        let admin = AdminConfig {
            username: Some("root".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", admin);
        assert!(debug_str.contains("root"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.credentials.gemini_api_key.is_none());
        assert!(config.admin.username.is_none());
        assert_eq!(config.admin.max_attempts, 5);
        assert_eq!(config.site.base_url, "https://toolly.online");
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_startup_warnings() {
        let config = Config::default();
        let warnings = config.startup_warnings();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("admin login is disabled")));
        assert!(warnings.iter().any(|w| w.contains("TOOLLY_GEMINI_API_KEY")));

        let mut config = Config::default();
        config.storage.path = Some(PathBuf::from("store.json"));
        config.admin.username = Some("root".to_string());
        config.admin.password = Some("hunter2".to_string());
        config.credentials.gemini_api_key = Some("key".to_string());
        assert!(config.startup_warnings().is_empty());

        config.features.speech_recognition = false;
        assert_eq!(config.startup_warnings().len(), 1);
    }
}
