//! Object-store access for the data commands.
//!
//! `ObjectStore` is the seam between the data flows and the storage
//! provider: the production implementation (`S3ObjectStore`) delegates to
//! the AWS S3 SDK, and tests substitute a programmable fake. Retry,
//! multipart handling, and credential resolution are the SDK's
//! responsibility; nothing here adds policy on top of a single put or get.

use std::path::Path;

use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tokio::io::AsyncWriteExt;

use crate::helpers::load_config::StorageConfig;

/// Per-object failure raised by a single upload or download.
///
/// These are the caught-per-item tier of the error model: the data flows
/// record them as diagnostics and continue with the next file, so the
/// message text carries everything the operator gets to see.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {path}: {message}")]
    ReadLocal { path: String, message: String },
    #[error("failed to write {path}: {message}")]
    WriteLocal { path: String, message: String },
    #[error("upload of {key} failed: {message}")]
    Upload { key: String, message: String },
    #[error("download of {key} failed: {message}")]
    Download { key: String, message: String },
}

/// Object-store operations consumed by the data flows.
///
/// Both calls are independently failable; under the partial-failure
/// contract in the data module a failure never aborts the enclosing batch.
pub trait ObjectStore {
    /// Upload a local file to `(bucket, key)`, attaching the original
    /// filename as object metadata.
    async fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
        filename: &str,
    ) -> Result<(), StorageError>;

    /// Download `(bucket, key)` into a local target path.
    async fn download_file(
        &self,
        bucket: &str,
        key: &str,
        target_path: &Path,
    ) -> Result<(), StorageError>;
}

/// Production store over the AWS S3 SDK.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Build a client from the SDK's default provider chain, with an
    /// optional region override from configuration.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let region_provider =
            RegionProviderChain::first_try(config.region.clone().map(Region::new))
                .or_default_provider();
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        }
    }
}

impl ObjectStore for S3ObjectStore {
    async fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: &str,
        filename: &str,
    ) -> Result<(), StorageError> {
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|err| StorageError::ReadLocal {
                path: local_path.display().to_string(),
                message: err.to_string(),
            })?;

        tracing::debug!(bucket, key, "uploading object");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .metadata("filename", filename)
            .body(body)
            .send()
            .await
            .map_err(|err| StorageError::Upload {
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(())
    }

    async fn download_file(
        &self,
        bucket: &str,
        key: &str,
        target_path: &Path,
    ) -> Result<(), StorageError> {
        tracing::debug!(bucket, key, "downloading object");
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| StorageError::Download {
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let mut file = tokio::fs::File::create(target_path).await.map_err(|err| {
            StorageError::WriteLocal {
                path: target_path.display().to_string(),
                message: err.to_string(),
            }
        })?;

        let mut body = response.body;
        while let Some(chunk) = body.try_next().await.map_err(|err| StorageError::Download {
            key: key.to_string(),
            message: err.to_string(),
        })? {
            file.write_all(&chunk)
                .await
                .map_err(|err| StorageError::WriteLocal {
                    path: target_path.display().to_string(),
                    message: err.to_string(),
                })?;
        }

        file.flush().await.map_err(|err| StorageError::WriteLocal {
            path: target_path.display().to_string(),
            message: err.to_string(),
        })?;

        Ok(())
    }
}
