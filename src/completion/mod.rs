// Chat-completion provider module
// Author: kelexine (https://github.com/kelexine)

mod client;

pub use client::OpenAiClient;

use crate::error::Result;
use crate::models::openai::ChatCompletionResponse;
use async_trait::async_trait;

/// Model every `/chat` request is sent to.
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Reply used when the provider answers with zero choices.
pub const EMPTY_REPLY: &str = "No response";

/// A remote text-completion API.
///
/// Implementations send `prompt` as a single user-role turn and return the
/// provider's raw response. Any transport, status or decoding failure is
/// reported as [`GatewayError::Upstream`](crate::error::GatewayError::Upstream).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<ChatCompletionResponse>;
}
