// S3-compatible storage client
// Author: kelexine (https://github.com/kelexine)

use super::ObjectStorage;
use crate::config::AppConfig;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::time::Instant;
use tracing::{debug, warn};

/// Region S3 treats as the default; buckets there take no location constraint.
const DEFAULT_REGION: &str = "us-east-1";

/// Static-credential S3 client with path-style addressing, so bucket names
/// never need to resolve as DNS labels (required by MinIO).
///
/// Each operation is sent exactly once; the SDK's retry policy is disabled.
pub struct S3Storage {
    client: Client,
    region: String,
}

impl S3Storage {
    /// Build a client from the storage settings in `config`.
    ///
    /// Fails only when the endpoint is not a valid URL; no request is made.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let endpoint = config.storage_url();
        reqwest::Url::parse(&endpoint)
            .map_err(|e| GatewayError::Config(format!("invalid storage endpoint {:?}: {}", endpoint, e)))?;

        let credentials = Credentials::new(
            config.storage_key.clone(),
            config.storage_secret.clone(),
            None,
            None,
            "provider-gate",
        );

        let s3_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.storage_region.clone()))
            .endpoint_url(&endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .retry_config(RetryConfig::disabled())
            .build();

        debug!("Created S3 client for {}", endpoint);

        Ok(Self {
            client: Client::from_conf(s3_config),
            region: config.storage_region.clone(),
        })
    }

    fn record(operation: &str, success: bool, started: Instant) {
        crate::metrics::record_upstream_call(
            "storage",
            operation,
            success,
            started.elapsed().as_secs_f64(),
        );
    }
}

/// Provider text for a failed call: the service's error message or code when
/// it sent one, otherwise the HTTP status, otherwise the transport error chain.
fn describe_error<E>(err: &SdkError<E, HttpResponse>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    if let Some(service_err) = err.as_service_error() {
        if let Some(message) = service_err.message() {
            return message.to_string();
        }
        if let Some(code) = service_err.code() {
            return code.to_string();
        }
    }

    match err.raw_response() {
        Some(response) => format!("{} (HTTP {})", err, response.status().as_u16()),
        None => DisplayErrorContext(err).to_string(),
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        let started = Instant::now();
        let result = self.client.head_bucket().bucket(bucket).send().await;

        let exists = match result {
            Ok(_) => Ok(true),
            Err(err) => {
                let not_found = err.as_service_error().is_some_and(|e| e.is_not_found())
                    || err
                        .raw_response()
                        .is_some_and(|response| response.status().as_u16() == 404);
                if not_found {
                    Ok(false)
                } else {
                    let message = describe_error(&err);
                    warn!("HeadBucket {} failed: {}", bucket, message);
                    Err(GatewayError::Upstream(message))
                }
            }
        };

        Self::record("bucket_exists", exists.is_ok(), started);
        exists
    }

    async fn make_bucket(&self, bucket: &str) -> Result<()> {
        let started = Instant::now();
        let mut request = self.client.create_bucket().bucket(bucket);
        if self.region != DEFAULT_REGION {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                    .build(),
            );
        }

        let result = request.send().await.map(|_| ()).map_err(|err| {
            let message = describe_error(&err);
            warn!("CreateBucket {} failed: {}", bucket, message);
            GatewayError::Upstream(message)
        });

        Self::record("make_bucket", result.is_ok(), started);
        result
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        let started = Instant::now();
        let content_length = body.len() as i64;

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .content_length(content_length)
            .body(ByteStream::from(body))
            .send()
            .await
            .map(|_| ())
            .map_err(|err| {
                let message = describe_error(&err);
                warn!("PutObject {}/{} failed: {}", bucket, key, message);
                GatewayError::Upstream(message)
            });

        Self::record("put_object", result.is_ok(), started);
        result
    }
}
