//! Collaborator configuration from environment variables.
//!
//! Each external collaborator receives an explicit [`ApiConfig`] at
//! construction time. Nothing reads credentials from global state after that.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Default recipe search endpoint (Rakuten Recipe category ranking API).
pub const DEFAULT_SEARCH_ENDPOINT: &str =
    "https://app.rakuten.co.jp/services/api/Recipe/CategoryRanking/20170426";

/// Default Gemini API base URL.
pub const DEFAULT_LLM_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model.
pub const DEFAULT_LLM_MODEL: &str = "gemini-1.5-flash";

pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Connection settings for one external API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API.
    pub endpoint: String,
    /// API key or application id. Some endpoints accept anonymous calls.
    pub credential: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: None,
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load recipe search configuration.
    ///
    /// Optional:
    /// - `KONDATE_SEARCH_ENDPOINT`: endpoint URL (default: Rakuten category ranking)
    /// - `RAKUTEN_APPLICATION_ID`: application id sent as `applicationId`
    /// - `KONDATE_SEARCH_TIMEOUT_SECS`: timeout in seconds (default: 10)
    pub fn search_from_env() -> Result<Self, ConfigError> {
        let endpoint = env::var("KONDATE_SEARCH_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_SEARCH_ENDPOINT.to_string());
        let credential = non_empty_var("RAKUTEN_APPLICATION_ID");
        let timeout = timeout_var("KONDATE_SEARCH_TIMEOUT_SECS", DEFAULT_SEARCH_TIMEOUT_SECS)?;

        Ok(Self {
            endpoint,
            credential,
            timeout,
        })
    }

    /// Load Gemini configuration.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`
    ///
    /// Optional:
    /// - `KONDATE_LLM_ENDPOINT`: API base URL
    /// - `KONDATE_LLM_TIMEOUT_SECS`: timeout in seconds (default: 60)
    pub fn llm_from_env() -> Result<Self, ConfigError> {
        let credential = non_empty_var("GEMINI_API_KEY")
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;
        let endpoint =
            env::var("KONDATE_LLM_ENDPOINT").unwrap_or_else(|_| DEFAULT_LLM_ENDPOINT.to_string());
        let timeout = timeout_var("KONDATE_LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?;

        Ok(Self {
            endpoint,
            credential: Some(credential),
            timeout,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn timeout_var(name: &str, default_secs: u64) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_timeout_secs(name, &value),
        Err(_) => Ok(Duration::from_secs(default_secs)),
    }
}

fn parse_timeout_secs(name: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })
}
