//! Fake LLM provider for testing.
//!
//! Returns canned responses chosen by prompt substring, so menu tests run
//! without network access or API keys.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::RwLock;

/// Canned menu used by [`FakeProvider::default`], fenced the way Gemini
/// usually answers.
const SAMPLE_MENU: &str = r#"```json
{
  "menu": [
    {
      "type": "主菜",
      "name": "鶏もも肉のソテー",
      "materials": ["鶏もも肉 (1枚)", "塩 (少々)"],
      "steps": ["鶏肉に塩をふる", "皮目から焼く"]
    },
    {
      "type": "副菜",
      "name": "玉ねぎのマリネ",
      "materials": ["玉ねぎ (1個)", "酢 (大さじ2)"],
      "steps": ["玉ねぎを薄切りにする", "酢と和える"]
    }
  ]
}
```"#;

/// A fake LLM provider for testing.
///
/// Patterns are checked in insertion order; the first one contained in the
/// prompt (case-insensitive) wins.
#[derive(Debug)]
pub struct FakeProvider {
    responses: RwLock<Vec<(String, String)>>,
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(Vec::new()),
            default_response: Some(SAMPLE_MENU.to_string()),
        }
    }
}

impl FakeProvider {
    /// A provider with no responses; every prompt errors.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(Vec::new()),
            default_response: None,
        }
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push((prompt_contains.to_lowercase(), response.to_string()));
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let prompt_lower = prompt.to_lowercase();
        let responses = self.responses.read().unwrap_or_else(|e| e.into_inner());

        if let Some((_, response)) = responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
        {
            return Ok(response.clone());
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
