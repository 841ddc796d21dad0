// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::completion::EMPTY_REPLY;
use crate::error::{GatewayError, Result};
use crate::models::api::{
    CompletionRequest, CompletionResponse, HealthConfig, HealthStatus, ServiceFlags,
    UploadRequest, UploadResponse,
};
use crate::storage::TEXT_CONTENT_TYPE;
use crate::utils::logging::sanitize;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::{debug, error, info, warn};

/// Handler for `GET /health`.
///
/// Reports which providers were configured, never whether they are reachable.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        services: ServiceFlags {
            completion: state.completion.is_some(),
            storage: state.storage.is_some(),
        },
        config: HealthConfig {
            port: state.config.port.clone(),
            storage_endpoint: state.config.storage_endpoint.clone(),
        },
    })
}

/// Handler for `POST /chat`.
///
/// 400 when no completion client is configured, 500 when the provider fails.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<CompletionRequest>,
) -> Result<Json<CompletionResponse>> {
    let client = state.completion.as_ref().ok_or_else(|| {
        GatewayError::ClientUnavailable("completion client not configured".to_string())
    })?;

    debug!("Forwarding chat message ({} bytes)", req.message.len());

    let response = client.complete(&req.message).await.map_err(|e| {
        let message = sanitize(&e.to_string());
        error!("Completion call failed: {}", message);
        GatewayError::Upstream(format!("failed to get completion response: {}", message))
    })?;

    let reply = response
        .first_content()
        .unwrap_or(EMPTY_REPLY)
        .to_string();

    Ok(Json(CompletionResponse { reply }))
}

/// Handler for `POST /upload`.
///
/// Always 200; failures are reported with `success: false` in the body.
/// A bucket created before a failed write is left in place.
pub async fn upload_handler(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Json<UploadResponse> {
    let Some(storage) = state.storage.as_ref() else {
        crate::metrics::record_upload("unconfigured");
        return Json(UploadResponse::failed("storage client not configured"));
    };

    let bucket = req.bucket_name.as_str();

    let exists = match storage.bucket_exists(bucket).await {
        Ok(exists) => exists,
        Err(e) => {
            crate::metrics::record_upload("bucket_check_failed");
            return Json(UploadResponse::failed(format!(
                "failed to check bucket existence: {}",
                e
            )));
        }
    };

    if !exists {
        info!("Creating bucket {}", bucket);
        if let Err(e) = storage.make_bucket(bucket).await {
            crate::metrics::record_upload("bucket_create_failed");
            return Json(UploadResponse::failed(format!("failed to create bucket: {}", e)));
        }
    }

    let body = Bytes::from(req.content.into_bytes());
    if let Err(e) = storage
        .put_object(bucket, &req.file_name, body, TEXT_CONTENT_TYPE)
        .await
    {
        warn!("Upload of {}/{} failed", bucket, req.file_name);
        crate::metrics::record_upload("upload_failed");
        return Json(UploadResponse::failed(format!("failed to upload file: {}", e)));
    }

    info!("Uploaded {}/{}", bucket, req.file_name);
    crate::metrics::record_upload("success");
    Json(UploadResponse::ok(format!(
        "File {} uploaded successfully to bucket {}",
        req.file_name, bucket
    )))
}

/// Handler for `GET /metrics` (Prometheus text exposition).
pub async fn metrics_handler() -> Result<Response> {
    let body = crate::metrics::gather_metrics()
        .map_err(|e| GatewayError::Internal(format!("failed to encode metrics: {}", e)))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response())
}
