use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload, WriteMultipart};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::application::ports::{ArtifactStore, ArtifactStoreError, TEXT_CONTENT_TYPE};
use crate::domain::StoragePath;

const READ_CHUNK_SIZE: usize = 1024 * 1024;

/// [`ArtifactStore`] over any `object_store` backend.
pub struct ObjectArtifactStore {
    inner: Arc<dyn ObjectStore>,
    uri_base: String,
}

impl ObjectArtifactStore {
    /// `uri_base` prefixes keys in [`ArtifactStore::object_uri`], e.g. `s3://bucket`.
    pub fn new(inner: Arc<dyn ObjectStore>, uri_base: impl Into<String>) -> Self {
        Self {
            inner,
            uri_base: uri_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Credentials come from the standard AWS environment variables.
    pub fn s3(region: Option<&str>, bucket: &str) -> Result<Self, ArtifactStoreError> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
        if let Some(region) = region {
            builder = builder.with_region(region);
        }
        let store = builder
            .build()
            .map_err(|e| ArtifactStoreError::Configuration(e.to_string()))?;

        Ok(Self::new(Arc::new(store), format!("s3://{}", bucket)))
    }

    async fn put_with_content_type(
        &self,
        path: &StoragePath,
        payload: PutPayload,
        content_type: &str,
    ) -> Result<(), ArtifactStoreError> {
        let store_path = StorePath::from(path.as_str());
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&store_path, payload, opts)
            .await
            .map(|_| ())
            .map_err(|e| ArtifactStoreError::UploadFailed {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait::async_trait]
impl ArtifactStore for ObjectArtifactStore {
    async fn upload_file(
        &self,
        local_path: &Path,
        path: &StoragePath,
    ) -> Result<u64, ArtifactStoreError> {
        let mut file = tokio::fs::File::open(local_path).await?;
        let store_path = StorePath::from(path.as_str());
        let upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| ArtifactStoreError::UploadFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let mut writer = WriteMultipart::new(upload);
        let mut buf = vec![0u8; READ_CHUNK_SIZE];
        let mut total_bytes: u64 = 0;

        loop {
            let read = match file.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    let _ = writer.abort().await;
                    return Err(ArtifactStoreError::Io(e));
                }
            };
            // One part in flight at a time.
            if let Err(e) = writer.wait_for_capacity(1).await {
                let _ = writer.abort().await;
                return Err(ArtifactStoreError::UploadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                });
            }
            total_bytes += read as u64;
            writer.write(&buf[..read]);
        }

        writer
            .finish()
            .await
            .map_err(|e| ArtifactStoreError::UploadFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Ok(total_bytes)
    }

    async fn put_text(&self, path: &StoragePath, text: &str) -> Result<(), ArtifactStoreError> {
        let payload = PutPayload::from(Bytes::copy_from_slice(text.as_bytes()));
        self.put_with_content_type(path, payload, TEXT_CONTENT_TYPE)
            .await
    }

    async fn put_bytes(
        &self,
        path: &StoragePath,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ArtifactStoreError> {
        self.put_with_content_type(path, PutPayload::from(data), content_type)
            .await
    }

    async fn get_json(&self, path: &StoragePath) -> Result<Value, ArtifactStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => ArtifactStoreError::NotFound(path.to_string()),
            e => ArtifactStoreError::DownloadFailed {
                path: path.to_string(),
                message: e.to_string(),
            },
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::DownloadFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let body = std::str::from_utf8(&bytes).map_err(|e| ArtifactStoreError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(body).map_err(|e| ArtifactStoreError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn object_uri(&self, path: &StoragePath) -> String {
        format!("{}/{}", self.uri_base, path.as_str())
    }
}
