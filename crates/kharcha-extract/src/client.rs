// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Groq OpenAI-compatible chat completions API.
//!
//! One request per extraction, single attempt, no retry. A failed or
//! rejected request is terminal for the extraction.

use std::time::Duration;

use async_trait::async_trait;
use kharcha_config::model::GroqConfig;
use kharcha_core::{CompletionClient, KharchaError};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Base URL for the Groq OpenAI-compatible API.
const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Request timeout. A hung completion call fails with `Service` instead of
/// blocking the caller indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for Groq chat completions.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl GroqClient {
    /// Creates a new Groq API client with bearer-token authentication.
    pub fn new(api_key: &str, model: String, max_tokens: u32) -> Result<Self, KharchaError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| KharchaError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| KharchaError::Service {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            max_tokens,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Creates a client from configuration.
    ///
    /// API key resolution: `groq.api_key` if set, then the `GROQ_API_KEY`
    /// environment variable, otherwise a fatal `Config` error.
    pub fn from_config(config: &GroqConfig) -> Result<Self, KharchaError> {
        let api_key = resolve_api_key(&config.api_key)?;
        Self::new(&api_key, config.model.clone(), config.max_tokens)
    }

    /// Returns the model identifier requests are sent with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    /// Sends the prompt as a single-message chat completion and returns the
    /// first choice's content.
    async fn complete(&self, prompt: &str) -> Result<String, KharchaError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: 0.0,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| KharchaError::Service {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "Groq API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(KharchaError::Service {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| KharchaError::Service {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| KharchaError::Service {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| KharchaError::Service {
                message: "completion reply contained no choices".into(),
                source: None,
            })
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, KharchaError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("GROQ_API_KEY").map_err(|_| {
        KharchaError::Config(
            "Groq API key not found. Set groq.api_key in config or the GROQ_API_KEY environment variable.".into(),
        )
    })
}
