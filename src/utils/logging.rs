//! Structured logging and secret redaction.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper that keeps
//! provider credentials out of log sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{GatewayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| GatewayError::Config(format!("invalid log level {:?}: {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    result.map_err(|e| GatewayError::Internal(format!("failed to install logger: {}", e)))
}

/// Token prefixes that mark a secret, paired with their replacement.
const SECRET_PATTERNS: [(&str, &str); 2] = [
    // OpenAI-style API keys: sk-..., sk-proj-...
    ("sk-", "[REDACTED_API_KEY]"),
    ("Bearer ", "Bearer [REDACTED_TOKEN]"),
];

/// Replaces API keys and bearer tokens in `input` with placeholders.
///
/// A secret runs from its prefix to the next whitespace, quote or comma.
/// Prefixes glued to a preceding alphanumeric (as in `task-`) are left alone.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    for (prefix, replacement) in SECRET_PATTERNS {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(prefix) {
            let start = search_from + offset;
            let glued = result[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
            if glued {
                search_from = start + prefix.len();
                continue;
            }

            let token_start = start + prefix.len();
            let end = result[token_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | ','))
                .map(|i| token_start + i)
                .unwrap_or(result.len());

            if end == token_start {
                search_from = token_start;
                continue;
            }

            result.replace_range(start..end, replacement);
            search_from = start + replacement.len();
        }
    }

    result
}
