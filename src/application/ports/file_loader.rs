use async_trait::async_trait;

#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Extracts the plain text of a document, pages joined with newlines.
    async fn extract_text(&self, data: &[u8]) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in document")]
    NoTextFound,
}
