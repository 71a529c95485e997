//! LLM provider abstraction for menu suggestion.
//!
//! Providers take a prompt and return the model's raw text. Everything
//! about menus (templating, fence stripping, parsing) lives in `crate::menu`.

mod caching;
mod fake;
mod gemini;

pub use caching::{CacheStats, CachingProvider};
pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::{ApiConfig, DEFAULT_LLM_MODEL};

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

/// Trait for LLM providers.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Like [`complete`](Self::complete), for callers that can tell a usable
    /// reply from an unusable one. Caching wrappers only store replies that
    /// `accept` returns true for, and ignore stored ones it rejects.
    async fn complete_checked(
        &self,
        prompt: &str,
        _accept: &(dyn for<'a> Fn(&'a str) -> bool + Sync),
    ) -> Result<String, LlmError> {
        self.complete(prompt).await
    }

    /// Provider name, e.g. "gemini" or "fake".
    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables.
///
/// - `KONDATE_LLM_PROVIDER`: "gemini" (default) | "fake"
/// - `KONDATE_LLM_MODEL`: model name (default: gemini-1.5-flash)
/// - `KONDATE_LLM_CACHE_DIR`: when set, wrap the provider in a disk cache
/// - see [`ApiConfig::llm_from_env`] for endpoint, key and timeout
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("KONDATE_LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    let inner: Box<dyn LlmProvider> = match provider.as_str() {
        "fake" => Box::new(FakeProvider::default()),
        "gemini" => {
            let config =
                ApiConfig::llm_from_env().map_err(|e| LlmError::NotConfigured(e.to_string()))?;
            let model = std::env::var("KONDATE_LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());
            Box::new(GeminiProvider::new(config, model)?)
        }
        other => {
            return Err(LlmError::NotConfigured(format!(
                "Unknown provider: {}",
                other
            )))
        }
    };

    match std::env::var("KONDATE_LLM_CACHE_DIR") {
        Ok(dir) if !dir.is_empty() => Ok(Box::new(CachingProvider::new(inner, dir.into()))),
        _ => Ok(inner),
    }
}
