use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FileStore, FileStoreError};
use crate::domain::StoragePath;

/// Topic files on the local disk, rooted at the configured media directory.
pub struct LocalFileStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalFileStore {
    pub fn new(base_path: PathBuf) -> Result<Self, FileStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| FileStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl FileStore for LocalFileStore {
    #[tracing::instrument(skip(self, data), fields(path = %path, bytes = data.len()))]
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = data.len() as u64;

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| FileStoreError::UploadFailed(e.to_string()))?;

        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => FileStoreError::NotFound(path.to_string()),
            other => FileStoreError::DownloadFailed(other.to_string()),
        })?;

        result
            .bytes()
            .await
            .map_err(|e| FileStoreError::DownloadFailed(e.to_string()))
    }

    #[tracing::instrument(skip(self), fields(path = %path))]
    async fn delete(&self, path: &StoragePath) -> Result<(), FileStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner.delete(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => FileStoreError::NotFound(path.to_string()),
            other => FileStoreError::DeleteFailed(other.to_string()),
        })
    }
}
