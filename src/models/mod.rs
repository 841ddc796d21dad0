//! Data models for the gateway's HTTP surface and the upstream completion API.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound gateway API (`api`)
//! - The upstream OpenAI-compatible Chat Completions API (`openai`)

// Author: kelexine (https://github.com/kelexine)

pub mod api;
pub mod openai;

pub use api::{
    CompletionRequest, CompletionResponse, HealthConfig, HealthStatus, ServiceFlags,
    UploadRequest, UploadResponse,
};
pub use openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, Role};
