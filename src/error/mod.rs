// Error types for provider-gate
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// A provider was never configured at startup.
    #[error("{0}")]
    ClientUnavailable(String),

    /// The remote provider (completion API or storage backend) failed or
    /// returned something we could not decode.
    #[error("{0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// HTTP status and machine-readable kind for this error.
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::ClientUnavailable(_) => (StatusCode::BAD_REQUEST, "client_unavailable"),
            GatewayError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error"),
            GatewayError::Config(_) | GatewayError::ConfigParsing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            GatewayError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "api_error"),
        }
    }
}

// Convert GatewayError to HTTP responses for Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();
        crate::metrics::record_error(error_type);

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
