use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Downloads the raw bytes behind a document reference.
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {status} for {reference}")]
    UnexpectedStatus { status: u16, reference: String },
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}
