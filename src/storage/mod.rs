//! Object-storage provider.
//!
//! The gateway only needs three bucket/object operations, expressed by the
//! [`ObjectStorage`] trait. [`S3Storage`] implements it against any
//! S3-compatible backend (AWS S3, MinIO, ...).
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod s3;

pub use s3::S3Storage;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Content type used for objects written by `/upload`.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Whether `bucket` exists. A missing bucket is `Ok(false)`, not an error.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create `bucket`.
    async fn make_bucket(&self, bucket: &str) -> Result<()>;

    /// Write `body` to `key` inside `bucket`, replacing any existing object.
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes, content_type: &str)
        -> Result<()>;
}
