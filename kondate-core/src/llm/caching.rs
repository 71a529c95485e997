//! Disk cache in front of an LLM provider.
//!
//! Responses are stored as JSON files under
//! `{cache_dir}/{provider}/{model}/{prompt_hash}.json`, so the same prompt to
//! the same model is only paid for once.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub provider: String,
    pub model: String,
    pub prompt_hash: String,
    pub cached_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedLlmResponse {
    metadata: CacheMetadata,
    response: String,
}

#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub cached_responses: usize,
}

/// Caching wrapper around any [`LlmProvider`].
#[derive(Debug)]
pub struct CachingProvider {
    inner: Box<dyn LlmProvider>,
    cache_dir: PathBuf,
}

impl CachingProvider {
    pub fn new(inner: Box<dyn LlmProvider>, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    /// First 16 bytes of the prompt's SHA-256, hex encoded.
    fn cache_key(prompt: &str) -> String {
        let digest = Sha256::digest(prompt.as_bytes());
        hex::encode(&digest[..16])
    }

    fn provider_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .join(self.inner.provider_name())
            .join(self.inner.model_name().replace(['/', ':'], "_"))
    }

    fn cache_path(&self, prompt_hash: &str) -> PathBuf {
        self.provider_cache_dir()
            .join(format!("{}.json", prompt_hash))
    }

    fn get_cached(&self, prompt_hash: &str) -> Option<String> {
        let content = fs::read_to_string(self.cache_path(prompt_hash)).ok()?;
        let cached: CachedLlmResponse = serde_json::from_str(&content).ok()?;
        tracing::debug!(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_hash,
            "LLM cache hit"
        );
        Some(cached.response)
    }

    fn save_to_cache(&self, prompt_hash: &str, response: &str) -> Result<(), LlmError> {
        fs::create_dir_all(self.provider_cache_dir())
            .map_err(|e| LlmError::CacheError(e.to_string()))?;

        let cached = CachedLlmResponse {
            metadata: CacheMetadata {
                provider: self.inner.provider_name().to_string(),
                model: self.inner.model_name().to_string(),
                prompt_hash: prompt_hash.to_string(),
                cached_at: Utc::now(),
            },
            response: response.to_string(),
        };

        let content = serde_json::to_string_pretty(&cached)
            .map_err(|e| LlmError::CacheError(e.to_string()))?;
        fs::write(self.cache_path(prompt_hash), content)
            .map_err(|e| LlmError::CacheError(e.to_string()))
    }

    pub fn cache_stats(&self) -> CacheStats {
        let count = fs::read_dir(self.provider_cache_dir())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                    .count()
            })
            .unwrap_or(0);

        CacheStats {
            cached_responses: count,
        }
    }
}

#[async_trait]
impl LlmProvider for CachingProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete_checked(prompt, &|_: &str| true).await
    }

    async fn complete_checked(
        &self,
        prompt: &str,
        accept: &(dyn for<'a> Fn(&'a str) -> bool + Sync),
    ) -> Result<String, LlmError> {
        let prompt_hash = Self::cache_key(prompt);

        if let Some(cached) = self.get_cached(&prompt_hash) {
            if accept(&cached) {
                return Ok(cached);
            }
            tracing::warn!(prompt_hash = %prompt_hash, "Ignoring unusable cached LLM response");
        }

        tracing::debug!(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_hash = %prompt_hash,
            "LLM cache miss, calling provider"
        );

        let response = self.inner.complete_checked(prompt, accept).await?;

        if !accept(&response) {
            tracing::debug!(prompt_hash = %prompt_hash, "Not caching rejected LLM response");
            return Ok(response);
        }

        // Best-effort: a failed write still returns the fresh response.
        if let Err(e) = self.save_to_cache(&prompt_hash, &response) {
            tracing::warn!(error = %e, "Failed to cache LLM response");
        }

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
