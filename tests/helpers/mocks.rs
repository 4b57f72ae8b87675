use std::sync::{Arc, Mutex};

use studyhub::application::ports::{
    DocumentFetcher, FetchError, FileLoader, FileLoaderError, GenerationRequest, LlmClient,
    LlmClientError,
};
use studyhub::application::services::{GenerationConfig, StudyMaterialService};

pub const TEST_MODEL: &str = "test-model";

/// Answers every call from a script and records the requests it received.
/// Without a script the n-th call answers `response n`.
pub struct ScriptedLlmClient {
    responses: Vec<String>,
    fail_at: Option<usize>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedLlmClient {
    pub fn numbered() -> Self {
        Self {
            responses: Vec::new(),
            fail_at: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_responses(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|r| r.to_string()).collect(),
            ..Self::numbered()
        }
    }

    /// Makes the given 1-based call fail.
    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmClientError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        if self.fail_at == Some(call) {
            return Err(LlmClientError::ApiRequestFailed(format!(
                "scripted failure on call {call}"
            )));
        }

        if self.responses.is_empty() {
            Ok(format!("response {call}"))
        } else {
            Ok(self.responses[(call - 1) % self.responses.len()].clone())
        }
    }
}

/// Serves the same document for every reference, or fails with a status.
pub struct StaticDocumentFetcher {
    document: Option<Vec<u8>>,
    fetched: Mutex<Vec<String>>,
}

impl StaticDocumentFetcher {
    pub fn serving(text: &str) -> Self {
        Self {
            document: Some(text.as_bytes().to_vec()),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn not_found() -> Self {
        Self {
            document: None,
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentFetcher for StaticDocumentFetcher {
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        self.fetched.lock().unwrap().push(reference.to_string());
        self.document
            .clone()
            .ok_or_else(|| FetchError::UnexpectedStatus {
                status: 404,
                reference: reference.to_string(),
            })
    }
}

/// Treats the document bytes as UTF-8 text.
pub struct Utf8FileLoader;

#[async_trait::async_trait]
impl FileLoader for Utf8FileLoader {
    async fn extract_text(&self, data: &[u8]) -> Result<String, FileLoaderError> {
        let text = String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound);
        }
        Ok(text)
    }
}

pub fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|n| format!("line {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn study_material_service(
    llm_client: Arc<ScriptedLlmClient>,
    fetcher: Arc<StaticDocumentFetcher>,
) -> StudyMaterialService<ScriptedLlmClient, Utf8FileLoader> {
    StudyMaterialService::new(
        llm_client,
        Arc::new(Utf8FileLoader),
        fetcher,
        TEST_MODEL.to_string(),
        GenerationConfig::default(),
    )
}
