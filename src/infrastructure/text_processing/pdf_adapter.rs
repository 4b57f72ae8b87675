use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts the text layer of a PDF with `pdf-extract`. Parsing is CPU bound
/// and runs on the blocking pool.
pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<String, FileLoaderError> {
        let bytes = data.to_vec();

        let text = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound);
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
