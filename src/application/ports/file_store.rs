use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Writes the object, replacing any previous content. Returns the byte count.
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, FileStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, FileStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), FileStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
