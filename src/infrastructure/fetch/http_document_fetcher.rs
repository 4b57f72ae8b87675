use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{DocumentFetcher, FetchError};

/// Downloads documents over HTTP(S). Every request is bounded by a single
/// timeout; non-success statuses are hard failures.
pub struct HttpDocumentFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpDocumentFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestFailed(format!("failed to build client: {e}")))?;

        Ok(Self { client, timeout })
    }

    fn map_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::TimedOut(self.timeout)
        } else {
            FetchError::RequestFailed(error.to_string())
        }
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(reference)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                reference: reference.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        tracing::debug!(bytes = body.len(), "Document downloaded");

        Ok(body.to_vec())
    }
}

