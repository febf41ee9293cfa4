// Configuration structs

use serde::Deserialize;
use std::time::Duration;

use crate::providers::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Top-level configuration, injected into the service at construction
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiSettings,
    pub retry: RetrySettings,
}

/// Gemini API connection and model selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// API credential; absent or empty switches study guides and quizzes to mock mode
    pub api_key: Option<String>,

    /// Base URL of the generative language API (overridable for proxies and tests)
    pub base_url: String,

    /// Model used for study guides, quizzes and chat
    pub text_model: String,

    /// Model used for anatomical diagrams
    pub image_model: String,

    /// Model used for text-to-speech
    pub speech_model: String,

    /// Prebuilt voice for narration
    pub voice: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            speech_model: "gemini-2.5-flash-preview-tts".to_string(),
            voice: "Kore".to_string(),
        }
    }
}

/// Retry and offline-mode timing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Retries after the first failed attempt (default: 2)
    pub max_retries: u32,

    /// Backoff unit; the n-th retry waits `base_delay_ms * n`
    pub base_delay_ms: u64,

    /// Simulated latency before returning mock content
    pub offline_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 1500,
            offline_delay_ms: 1000,
        }
    }
}

impl Config {
    pub fn new(api_key: Option<String>) -> Self {
        let mut config = Self::default();
        config.gemini.api_key = api_key;
        config
    }

    /// The configured credential, treating an empty or blank key as absent
    pub fn api_key(&self) -> Option<&str> {
        self.gemini
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.retry.max_retries,
            base_delay: Duration::from_millis(self.retry.base_delay_ms),
        }
    }

    pub fn offline_delay(&self) -> Duration {
        Duration::from_millis(self.retry.offline_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api_key().is_none());
        assert_eq!(config.gemini.text_model, "gemini-2.5-flash");
        assert_eq!(config.gemini.voice, "Kore");
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.offline_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_blank_key_is_absent() {
        assert!(Config::new(Some("   ".to_string())).api_key().is_none());
        assert!(Config::new(Some(String::new())).api_key().is_none());
        assert_eq!(
            Config::new(Some("test-key".to_string())).api_key(),
            Some("test-key")
        );
    }
}
