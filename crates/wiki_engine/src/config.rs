use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::ConfigError;

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Credentials and endpoint for one generation call, resolved when the call
/// is made rather than at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GenerationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = present(API_KEY_VAR)
            .or_else(|| present(API_KEY_FALLBACK_VAR))
            .ok_or(ConfigError::MissingApiKey)?;
        let model = present(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = present(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        reqwest::Url::parse(&base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            message: err.to_string(),
        })?;

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Source of config for each call. Tests swap the environment for a fixed
/// value.
pub type ConfigSource = Arc<dyn Fn() -> Result<GenerationConfig, ConfigError> + Send + Sync>;

/// Millisecond wall clock used to stamp entry ids.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

#[derive(Clone)]
pub struct GenerationSettings {
    pub temperature: f32,
    /// Number of entries requested from the generator.
    pub entry_count: usize,
    pub connect_timeout: Duration,
    /// `None` waits indefinitely for the generator.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
    pub config: ConfigSource,
    pub clock: Clock,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            entry_count: 6,
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 2 * 1024 * 1024,
            config: Arc::new(GenerationConfig::from_env),
            clock: Arc::new(|| chrono::Utc::now().timestamp_millis()),
        }
    }
}

impl fmt::Debug for GenerationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationSettings")
            .field("temperature", &self.temperature)
            .field("entry_count", &self.entry_count)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_response_bytes", &self.max_response_bytes)
            .finish_non_exhaustive()
    }
}
