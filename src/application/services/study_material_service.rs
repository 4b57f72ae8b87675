use std::fmt;
use std::sync::Arc;

use crate::application::ports::{
    DocumentFetcher, FetchError, FileLoader, FileLoaderError, GenerationRequest, LlmClient,
    LlmClientError,
};
use crate::domain::QuizAndFlashcards;

use super::generation_config::{ArtifactProfile, GenerationConfig};
use super::line_chunker::chunk_lines;
use super::prompts;
use super::response_splitter::{ITEM_SEPARATOR, split_items};
use super::text_normalizer::{NoUsableText, normalize_text};

/// Turns a document into study material: fetch, extract, normalize, chunk,
/// then one generation call per chunk, strictly in chunk order.
///
/// Any failure aborts the whole run; nothing generated before the failure is
/// returned.
pub struct StudyMaterialService<L, F>
where
    L: LlmClient,
    F: FileLoader,
{
    llm_client: Arc<L>,
    file_loader: Arc<F>,
    document_fetcher: Arc<dyn DocumentFetcher>,
    model: String,
    config: GenerationConfig,
}

impl<L, F> StudyMaterialService<L, F>
where
    L: LlmClient,
    F: FileLoader,
{
    pub fn new(
        llm_client: Arc<L>,
        file_loader: Arc<F>,
        document_fetcher: Arc<dyn DocumentFetcher>,
        model: String,
        config: GenerationConfig,
    ) -> Self {
        Self {
            llm_client,
            file_loader,
            document_fetcher,
            model,
            config,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    #[tracing::instrument(skip(self))]
    pub async fn summarize(&self, reference: &str) -> Result<String, StudyMaterialError> {
        let chunks = self
            .load_chunks(reference, self.config.summary.max_lines)
            .await?;
        self.summarize_chunks(&chunks).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn flashcards(&self, reference: &str) -> Result<Vec<String>, StudyMaterialError> {
        let chunks = self
            .load_chunks(reference, self.config.flashcards.max_lines)
            .await?;
        self.flashcards_from_chunks(&chunks).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn quiz(&self, reference: &str) -> Result<Vec<String>, StudyMaterialError> {
        let chunks = self
            .load_chunks(reference, self.config.quiz.max_lines)
            .await?;
        self.quiz_from_chunks(&chunks).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn quiz_and_flashcards(
        &self,
        reference: &str,
    ) -> Result<QuizAndFlashcards, StudyMaterialError> {
        let chunks = self
            .load_chunks(reference, self.config.quiz_and_flashcards.max_lines)
            .await?;
        self.quiz_and_flashcards_from_chunks(&chunks).await
    }

    /// Fetches, extracts, normalizes and chunks the document.
    pub async fn load_chunks(
        &self,
        reference: &str,
        max_lines: usize,
    ) -> Result<Vec<String>, StudyMaterialError> {
        let data = self.document_fetcher.fetch(reference).await?;
        tracing::debug!(bytes = data.len(), "Document fetched");

        let raw = match self.file_loader.extract_text(&data).await {
            Ok(raw) => raw,
            Err(FileLoaderError::NoTextFound) => return Err(StudyMaterialError::NoUsableText),
            Err(e) => return Err(e.into()),
        };
        let text = normalize_text(&raw)?;

        let chunks = chunk_lines(&text, max_lines);
        if chunks.is_empty() {
            return Err(StudyMaterialError::Chunking);
        }

        tracing::info!(
            chars = text.len(),
            chunk_count = chunks.len(),
            max_lines,
            "Document prepared for generation"
        );

        Ok(chunks)
    }

    /// Writes one note per chunk, merges the notes in batches, and merges the
    /// batch results once more when there is more than one batch.
    pub async fn summarize_chunks(&self, chunks: &[String]) -> Result<String, StudyMaterialError> {
        if chunks.is_empty() {
            return Err(StudyMaterialError::Chunking);
        }

        let summary = &self.config.summary;
        let partials = self
            .generate_per_chunk(chunks, prompts::SUMMARY_NOTE, &summary.chunk_profile())
            .await?;

        let mut merged = Vec::new();
        for (index, batch) in partials.chunks(summary.merge_batch_size.max(1)).enumerate() {
            let note = self
                .generate(
                    GenerationStage::MergeBatch(index + 1),
                    prompts::SUMMARY_MERGE,
                    &batch.join(ITEM_SEPARATOR),
                    summary.merge_max_tokens,
                    summary.temperature,
                )
                .await?;
            merged.push(note);
        }

        tracing::debug!(
            partial_count = partials.len(),
            batch_count = merged.len(),
            "Summary batches merged"
        );

        if let [single] = merged.as_mut_slice() {
            return Ok(std::mem::take(single));
        }

        self.generate(
            GenerationStage::FinalMerge,
            prompts::SUMMARY_MERGE,
            &merged.join(ITEM_SEPARATOR),
            summary.final_max_tokens,
            summary.temperature,
        )
        .await
    }

    pub async fn flashcards_from_chunks(
        &self,
        chunks: &[String],
    ) -> Result<Vec<String>, StudyMaterialError> {
        let parts = self
            .generate_per_chunk(chunks, prompts::FLASHCARDS, &self.config.flashcards)
            .await?;
        Ok(split_items(&parts.join(ITEM_SEPARATOR)))
    }

    pub async fn quiz_from_chunks(
        &self,
        chunks: &[String],
    ) -> Result<Vec<String>, StudyMaterialError> {
        let parts = self
            .generate_per_chunk(chunks, prompts::QUIZ, &self.config.quiz)
            .await?;
        Ok(split_items(&parts.join(ITEM_SEPARATOR)))
    }

    /// Two calls per chunk, quiz first. The quiz parts are returned as one
    /// text block, the flashcards split into cards.
    pub async fn quiz_and_flashcards_from_chunks(
        &self,
        chunks: &[String],
    ) -> Result<QuizAndFlashcards, StudyMaterialError> {
        if chunks.is_empty() {
            return Err(StudyMaterialError::Chunking);
        }

        let profile = self.config.quiz_and_flashcards;
        let mut quiz_parts = Vec::with_capacity(chunks.len());
        let mut flashcard_parts = Vec::with_capacity(chunks.len());

        for (index, chunk) in chunks.iter().enumerate() {
            let stage = GenerationStage::Chunk(index + 1);
            quiz_parts.push(
                self.generate(
                    stage,
                    prompts::COMBINED_QUIZ,
                    chunk,
                    profile.max_tokens,
                    profile.temperature,
                )
                .await?,
            );
            flashcard_parts.push(
                self.generate(
                    stage,
                    prompts::COMBINED_FLASHCARDS,
                    chunk,
                    profile.max_tokens,
                    profile.temperature,
                )
                .await?,
            );
        }

        Ok(QuizAndFlashcards {
            quiz: quiz_parts.join(ITEM_SEPARATOR),
            flashcards: split_items(&flashcard_parts.join(ITEM_SEPARATOR)),
        })
    }

    async fn generate_per_chunk(
        &self,
        chunks: &[String],
        system_prompt: &str,
        profile: &ArtifactProfile,
    ) -> Result<Vec<String>, StudyMaterialError> {
        if chunks.is_empty() {
            return Err(StudyMaterialError::Chunking);
        }

        let mut parts = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            let part = self
                .generate(
                    GenerationStage::Chunk(index + 1),
                    system_prompt,
                    chunk,
                    profile.max_tokens,
                    profile.temperature,
                )
                .await?;
            parts.push(part);
        }
        Ok(parts)
    }

    async fn generate(
        &self,
        stage: GenerationStage,
        system_prompt: &str,
        user_content: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, StudyMaterialError> {
        let request = GenerationRequest {
            model: self.model.clone(),
            system_prompt: system_prompt.to_string(),
            user_content: user_content.to_string(),
            max_tokens,
            temperature,
        };

        match self.llm_client.generate(&request).await {
            Ok(text) => {
                tracing::debug!(%stage, chars = text.len(), "Generation call completed");
                Ok(text.trim().to_string())
            }
            Err(source) => {
                tracing::error!(%stage, error = %source, "Generation call failed");
                Err(StudyMaterialError::Backend { stage, source })
            }
        }
    }
}

/// Which generation call of a pipeline run failed. Numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Chunk(usize),
    MergeBatch(usize),
    FinalMerge,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationStage::Chunk(n) => write!(f, "chunk {n}"),
            GenerationStage::MergeBatch(n) => write!(f, "merge batch {n}"),
            GenerationStage::FinalMerge => f.write_str("final merge"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StudyMaterialError {
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("no usable text")]
    NoUsableText,
    #[error("could not chunk text")]
    Chunking,
    #[error("{stage}: {source}")]
    Backend {
        stage: GenerationStage,
        #[source]
        source: LlmClientError,
    },
}

impl From<NoUsableText> for StudyMaterialError {
    fn from(_: NoUsableText) -> Self {
        StudyMaterialError::NoUsableText
    }
}
