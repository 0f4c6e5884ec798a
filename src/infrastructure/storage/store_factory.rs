use std::sync::Arc;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::presentation::config::StorageSettings;

use super::object_artifact_store::ObjectArtifactStore;

pub struct StoreFactory;

impl StoreFactory {
    pub fn create(
        settings: &StorageSettings,
    ) -> Result<Arc<dyn ArtifactStore>, ArtifactStoreError> {
        if settings.bucket.trim().is_empty() {
            return Err(ArtifactStoreError::Configuration("S3_BUCKET required".into()));
        }
        let store = ObjectArtifactStore::s3(settings.region.as_deref(), &settings.bucket)?;
        Ok(Arc::new(store))
    }
}
