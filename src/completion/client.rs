// OpenAI-compatible chat-completion client
// Author: kelexine (https://github.com/kelexine)

use super::{CompletionProvider, COMPLETION_MODEL};
use crate::config::AppConfig;
use crate::error::{GatewayError, Result};
use crate::models::openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Client for an OpenAI-compatible Chat Completions API.
///
/// One request per call, no retries. Errors are returned to the caller
/// immediately with the provider's message embedded.
pub struct OpenAiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Build a client from the completion settings in `config`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.completion_timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created completion HTTP client for {}", config.completion_base_url);

        Ok(Self {
            http_client,
            base_url: config.completion_base_url.trim_end_matches('/').to_string(),
            api_key: config.completion_api_key.clone(),
        })
    }

    /// Extract the human-readable message from an OpenAI error body.
    fn extract_error_message(response_text: &str) -> Option<String> {
        serde_json::from_str::<ErrorEnvelope>(response_text)
            .ok()
            .map(|envelope| match envelope.error.error_type {
                Some(kind) => format!("{} ({})", envelope.error.message, kind),
                None => envelope.error.message,
            })
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::Upstream(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            let message = sanitize(&message);
            error!("Completion API error: HTTP {} - {}", status, message);
            return Err(GatewayError::Upstream(format!("HTTP {}: {}", status.as_u16(), message)));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse completion response: {}", e);
            GatewayError::Upstream(format!("Response parsing error: {}", e))
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<ChatCompletionResponse> {
        let request = ChatCompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!("Calling chat completions for model: {}", COMPLETION_MODEL);
        let started = Instant::now();
        let result = self.send(&request).await;
        crate::metrics::record_upstream_call(
            "completion",
            "chat",
            result.is_ok(),
            started.elapsed().as_secs_f64(),
        );

        let response = result?;
        debug!("Received {} choice(s)", response.choices.len());
        Ok(response)
    }
}
