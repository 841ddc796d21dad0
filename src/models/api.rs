//! Request and response bodies of the gateway's own HTTP surface.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Message forwarded to the completion provider as a single user turn.
    pub message: String,
}

/// Successful reply of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub reply: String,
}

/// Body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub bucket_name: String,
    pub file_name: String,
    /// Stored verbatim as a `text/plain` object.
    pub content: String,
}

/// Reply of `POST /upload`. Failures are reported in-band with
/// `success: false`, never through the HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
}

impl UploadResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Reply of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"healthy"`; the endpoint reports configuration, not reachability.
    pub status: String,
    pub services: ServiceFlags,
    pub config: HealthConfig,
}

/// Which optional providers were configured at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFlags {
    pub completion: bool,
    pub storage: bool,
}

/// The subset of effective configuration exposed by `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    pub port: String,
    pub storage_endpoint: String,
}
