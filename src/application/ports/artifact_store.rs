use std::io;
use std::path::Path;

use bytes::Bytes;
use serde_json::Value;

use crate::domain::StoragePath;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Object storage for every artifact a run produces.
///
/// Writes are visible as soon as the call returns.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Uploads the raw bytes of a local file. Returns the byte count.
    async fn upload_file(
        &self,
        local_path: &Path,
        path: &StoragePath,
    ) -> Result<u64, ArtifactStoreError>;

    async fn put_text(&self, path: &StoragePath, text: &str) -> Result<(), ArtifactStoreError>;

    async fn put_bytes(
        &self,
        path: &StoragePath,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ArtifactStoreError>;

    async fn get_json(&self, path: &StoragePath) -> Result<Value, ArtifactStoreError>;

    /// Location another service can read the object from, e.g. `s3://bucket/key`.
    fn object_uri(&self, path: &StoragePath) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("upload failed for {path}: {message}")]
    UploadFailed { path: String, message: String },
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed for {path}: {message}")]
    DownloadFailed { path: String, message: String },
    #[error("invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },
    #[error("backend configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
