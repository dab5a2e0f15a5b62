use crate::config::{LlmConfig, Provider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

/// Anything that turns one prompt into one reply text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_s))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { config, client })
    }

    fn request_parts(&self, prompt: &str) -> (String, Value) {
        let base_url = self.config.base_url.trim_end_matches('/');
        match self.config.provider {
            Provider::OpenAi => (
                format!("{}/chat/completions", base_url),
                json!({
                    "model": self.config.model,
                    "messages": [{"role": "user", "content": prompt}],
                    "temperature": self.config.temperature,
                }),
            ),
            Provider::Gemini => (
                format!("{}/models/{}:generateContent", base_url, self.config.model),
                json!({
                    "contents": [{"parts": [{"text": prompt}]}],
                    "generationConfig": {"temperature": self.config.temperature},
                }),
            ),
        }
    }

    fn parse_response(&self, data: &Value) -> Result<String> {
        let text = match self.config.provider {
            Provider::OpenAi => data["choices"][0]["message"]["content"].as_str(),
            Provider::Gemini => data["candidates"][0]["content"]["parts"][0]["text"].as_str(),
        };
        text.map(String::from)
            .context(format!("Failed to parse LLM response for {}", self.config.provider))
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let (url, payload) = self.request_parts(prompt);

        info!("Sending request to {} model {}", self.config.provider, self.config.model);

        let mut builder = self.client.post(&url).json(&payload);
        builder = match self.config.provider {
            Provider::OpenAi => builder.bearer_auth(&self.config.api_key),
            Provider::Gemini => builder.header("x-goog-api-key", &self.config.api_key),
        };

        // Errors reach callers, so they must not carry the request URL.
        let response = builder
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("request to {} failed", self.config.provider))?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let response_json: Value = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        self.parse_response(&response_json)
    }
}
