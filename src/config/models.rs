//! Configuration data structures for provider-gate.
//!
//! The five provider keys live at the top level so they map one-to-one onto
//! `APP_*` environment variables. An empty key disables the provider that
//! depends on it.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the server binds to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the server listens on. Kept as a string, as it is reported back
    /// verbatim by `/health`.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: String,

    /// API key for the chat-completion provider. Empty disables `/chat`.
    #[serde(default)]
    pub completion_api_key: String,

    /// Base URL of the OpenAI-compatible completion API.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_completion_base_url")]
    pub completion_base_url: String,

    /// Request timeout for completion calls, in seconds.
    /// Default: `60`
    #[serde(default = "default_completion_timeout")]
    pub completion_timeout_seconds: u64,

    /// `host:port` of the S3-compatible storage backend.
    /// Default: `localhost:9000`
    #[serde(default = "default_storage_endpoint")]
    pub storage_endpoint: String,

    /// Access key for the storage backend.
    #[serde(default)]
    pub storage_key: String,

    /// Secret key for the storage backend.
    #[serde(default)]
    pub storage_secret: String,

    /// Region sent when signing storage requests.
    /// Default: `us-east-1`
    #[serde(default = "default_storage_region")]
    pub storage_region: String,

    /// Use `https://` for the storage endpoint.
    /// Default: `false`
    #[serde(default)]
    pub storage_secure: bool,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl AppConfig {
    /// Whether the completion key is present.
    pub fn completion_enabled(&self) -> bool {
        !self.completion_api_key.is_empty()
    }

    /// Whether both storage credentials are present.
    pub fn storage_enabled(&self) -> bool {
        !self.storage_key.is_empty() && !self.storage_secret.is_empty()
    }

    /// Full URL of the storage endpoint, scheme included.
    pub fn storage_url(&self) -> String {
        if self.storage_endpoint.contains("://") {
            return self.storage_endpoint.clone();
        }
        let scheme = if self.storage_secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.storage_endpoint)
    }

    /// `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            completion_api_key: String::new(),
            completion_base_url: default_completion_base_url(),
            completion_timeout_seconds: default_completion_timeout(),
            storage_endpoint: default_storage_endpoint(),
            storage_key: String::new(),
            storage_secret: String::new(),
            storage_region: default_storage_region(),
            storage_secure: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_completion_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_completion_timeout() -> u64 {
    60
}

fn default_storage_endpoint() -> String {
    "localhost:9000".to_string()
}

fn default_storage_region() -> String {
    "us-east-1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
