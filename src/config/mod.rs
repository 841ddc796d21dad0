// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File, Map};
use std::path::Path;

/// Prefix for environment overrides, e.g. `APP_PORT`.
pub const ENV_PREFIX: &str = "APP";

/// File stems searched when no explicit config path is given. Any extension
/// the `config` crate understands (`toml`, `yaml`, `json`, ...) is accepted.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config", "config/config"];

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Same as [`AppConfig::load`], but reads environment overrides from
    /// `env` instead of the process environment when it is `Some`.
    pub fn load_with_env(
        config_path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?);

        // Explicit file must exist; the default locations are optional
        builder = match config_path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => DEFAULT_CONFIG_FILES.iter().fold(builder, |builder, stem| {
                builder.add_source(File::with_name(stem).required(false))
            }),
        };

        let config = builder
            // Override with environment variables (prefix: APP_, nested: __)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config.port, "8080");
        assert_eq!(config.storage_endpoint, "localhost:9000");
        assert!(config.completion_api_key.is_empty());
        assert!(!config.completion_enabled());
        assert!(!config.storage_enabled());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = AppConfig::load_with_env(
            None,
            env(&[
                ("APP_PORT", "9090"),
                ("APP_STORAGE_ENDPOINT", "test.example.com:9000"),
                ("APP_COMPLETION_API_KEY", "sk-test"),
            ]),
        )
        .unwrap();
        assert_eq!(config.port, "9090");
        assert_eq!(config.storage_endpoint, "test.example.com:9000");
        assert!(config.completion_enabled());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = config_file("port = \"8080\"\nstorage_key = \"from-file\"\n");
        let config =
            AppConfig::load_with_env(Some(file.path()), env(&[("APP_PORT", "9090")])).unwrap();
        assert_eq!(config.port, "9090");
        assert_eq!(config.storage_key, "from-file");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = config_file(
            "port = 7000\nstorage_endpoint = \"minio:9000\"\n\n[logging]\nformat = \"json\"\n",
        );
        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.port, "7000");
        assert_eq!(config.storage_endpoint, "minio:9000");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_nested_env_key() {
        let config =
            AppConfig::load_with_env(None, env(&[("APP_LOGGING__LEVEL", "debug")])).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result =
            AppConfig::load_with_env(Some(Path::new("/nonexistent/provider-gate.toml")), env(&[]));
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_storage_requires_both_credentials() {
        let config = AppConfig {
            storage_key: "key".to_string(),
            ..AppConfig::default()
        };
        assert!(!config.storage_enabled());

        let config = AppConfig {
            storage_key: "key".to_string(),
            storage_secret: "secret".to_string(),
            ..AppConfig::default()
        };
        assert!(config.storage_enabled());
    }

    #[test]
    fn test_storage_url_scheme() {
        let mut config = AppConfig::default();
        assert_eq!(config.storage_url(), "http://localhost:9000");

        config.storage_secure = true;
        assert_eq!(config.storage_url(), "https://localhost:9000");

        config.storage_endpoint = "http://minio.internal:9000".to_string();
        assert_eq!(config.storage_url(), "http://minio.internal:9000");
    }
}
