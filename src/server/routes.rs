// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{chat_handler, health_handler, metrics_handler, upload_handler};
use super::middleware::{request_id_layers, track_metrics};
use crate::completion::{CompletionProvider, OpenAiClient};
use crate::config::AppConfig;
use crate::error::Result;
use crate::storage::{ObjectStorage, S3Storage};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Largest accepted request body. Uploads carry their content inline as JSON.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Everything a handler may read. Built once before the server starts and
/// never mutated; an absent client means the provider is disabled.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub completion: Option<Arc<dyn CompletionProvider>>,
    pub storage: Option<Arc<dyn ObjectStorage>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        completion: Option<Arc<dyn CompletionProvider>>,
        storage: Option<Arc<dyn ObjectStorage>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            completion,
            storage,
        }
    }

    /// Construct the provider clients that `config` has credentials for.
    ///
    /// A storage endpoint that cannot be parsed disables storage instead of
    /// aborting startup.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let completion: Option<Arc<dyn CompletionProvider>> = if config.completion_enabled() {
            let client = OpenAiClient::new(&config)?;
            info!("Completion client initialized");
            Some(Arc::new(client))
        } else {
            info!("Completion API key not provided, chat functionality will be disabled");
            None
        };

        let storage: Option<Arc<dyn ObjectStorage>> = if config.storage_enabled() {
            match S3Storage::new(&config) {
                Ok(client) => {
                    info!("Storage client initialized");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    warn!("Failed to initialize storage client: {}", e);
                    None
                }
            }
        } else {
            info!("Storage credentials not provided, file upload functionality will be disabled");
            None
        };

        Ok(Self::new(config, completion, storage))
    }
}

pub fn create_router(state: AppState) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/upload", post(upload_handler))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
