//! OpenAI Chat Completions API type definitions.
//!
//! Only the fields the gateway sends or reads are modelled; unknown response
//! fields are ignored on deserialization.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Chat Completions request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// ID of the model to use.
    pub model: String,

    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Developer,
    User,
    Assistant,
    Tool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Null for tool-call-only assistant messages.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
        }
    }
}

/// Chat Completions response structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,

    pub message: ChatMessage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if there is one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref().unwrap_or_default())
    }
}

/// Error envelope returned by OpenAI-compatible APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage::user("Hello!")],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Hello!");
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hi there"},
                "logprobs": null,
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content(), Some("Hi there"));
    }

    #[test]
    fn test_first_content_empty_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"id":"x","choices":[]}"#).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_first_content_null_message_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), Some(""));
    }
}
