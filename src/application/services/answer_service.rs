use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    DocumentRepository, GatewayError, GenerationConfig, LlmGateway, RepositoryError,
};
use crate::domain::DocumentId;

use super::chunk_splitter::split_into_chunks;
use super::content_normalizer::normalize;
use super::prompt_builder::{PromptMode, build_answer_prompt, build_summary_probe};

/// Appended to the answer when normalization shortened the content.
pub const TRUNCATION_NOTE: &str = "\n\n*Note: The document was truncated due to length limitations. Some content may not be available for questioning.*";

/// Appended on the long path when more than one chunk existed but only the
/// first was sent.
pub const PARTIAL_NOTE: &str =
    "\n\n*Note: Only part of the document was processed due to length limitations.*";

#[derive(Debug, Clone)]
pub struct AnswerLimits {
    /// Upper bound on a single gateway call; expiry cancels the request.
    pub gateway_timeout: Duration,
    pub max_output_tokens: u32,
    pub long_max_output_tokens: u32,
    pub temperature: f32,
    /// Per-chunk bound on the long-document path.
    pub long_chunk_size: usize,
    /// Chunk-count ceiling on the long-document path.
    pub max_chunks: usize,
    /// Slice length sent by the diagnostic content probe.
    pub probe_length: usize,
}

impl Default for AnswerLimits {
    fn default() -> Self {
        Self {
            gateway_timeout: Duration::from_secs(60),
            max_output_tokens: 1000,
            long_max_output_tokens: 800,
            temperature: 0.3,
            long_chunk_size: 15_000,
            max_chunks: 3,
            probe_length: 1000,
        }
    }
}

/// Orchestrates the document-to-answer pipeline: fetch stored content,
/// normalize, build the prompt, make one gateway call, classify the outcome.
///
/// Every failure is surfaced immediately; no path retries, since the
/// gateway is a paid metered service.
pub struct AnswerService<G>
where
    G: LlmGateway,
{
    repository: Arc<dyn DocumentRepository>,
    gateway: Arc<G>,
    limits: AnswerLimits,
}

impl<G> AnswerService<G>
where
    G: LlmGateway,
{
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        gateway: Arc<G>,
        limits: AnswerLimits,
    ) -> Self {
        Self {
            repository,
            gateway,
            limits,
        }
    }

    /// Primary path: the entire normalized content in one full-mode prompt.
    /// Normalization's truncation is the only length control here.
    pub async fn ask(
        &self,
        question: &str,
        document_id: DocumentId,
    ) -> Result<Answer, AnswerError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AnswerError::Validation(
                "question must not be empty".to_string(),
            ));
        }

        let document = self
            .repository
            .get_by_id(document_id)
            .await?
            .ok_or(AnswerError::NotFound(document_id))?;

        if document.content.trim().is_empty() {
            return Err(AnswerError::EmptyContent(document_id));
        }

        let original_length = document.content.len();
        let content = normalize(&document.content);
        let content_length = content.len();

        let prompt = build_answer_prompt(&content, question, PromptMode::Full);
        let config = GenerationConfig {
            max_output_tokens: self.limits.max_output_tokens,
            temperature: self.limits.temperature,
        };

        let mut answer = self
            .gateway
            .generate(&prompt, &config, self.limits.gateway_timeout)
            .await
            .map_err(|source| AnswerError::Gateway {
                source,
                content_length,
            })?;

        if content_length < original_length {
            answer.push_str(TRUNCATION_NOTE);
        }

        Ok(Answer {
            answer,
            content_length,
            original_length,
        })
    }

    /// Long-document path: normalize, split at the smaller per-chunk bound,
    /// refuse documents over the chunk ceiling without calling the gateway.
    ///
    /// Only the first chunk is sent even when several exist; the answer then
    /// carries a partial-processing note. Aggregating across chunks is a
    /// candidate follow-up, not current behavior.
    pub async fn ask_long(
        &self,
        question: &str,
        document_id: DocumentId,
    ) -> Result<LongAnswer, AnswerError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AnswerError::Validation(
                "question must not be empty".to_string(),
            ));
        }

        let document = self
            .repository
            .get_by_id(document_id)
            .await?
            .ok_or(AnswerError::NotFound(document_id))?;

        if document.content.trim().is_empty() {
            return Err(AnswerError::EmptyContent(document_id));
        }

        let content = normalize(&document.content);
        let chunks = split_into_chunks(&content, self.limits.long_chunk_size);
        let total_chunks = chunks.len();

        tracing::debug!(total_chunks, "Split document for long-path answer");

        if total_chunks > self.limits.max_chunks {
            return Err(AnswerError::TooManyChunks {
                total: total_chunks,
                limit: self.limits.max_chunks,
            });
        }

        let first_chunk = chunks.first().map(String::as_str).unwrap_or_default();
        let prompt = build_answer_prompt(first_chunk, question, PromptMode::Partial);
        let config = GenerationConfig {
            max_output_tokens: self.limits.long_max_output_tokens,
            temperature: self.limits.temperature,
        };

        let mut answer = self
            .gateway
            .generate(&prompt, &config, self.limits.gateway_timeout)
            .await
            .map_err(|source| AnswerError::Gateway {
                source,
                content_length: first_chunk.len(),
            })?;

        if total_chunks > 1 {
            answer.push_str(PARTIAL_NOTE);
        }

        Ok(LongAnswer {
            answer,
            chunks_processed: 1,
            total_chunks,
        })
    }

    /// Diagnostic path: bypasses the store, sends a short probe slice, and
    /// reports whether the gateway accepts the content at all.
    pub async fn test_content(&self, content: &str) -> Result<ContentProbe, AnswerError> {
        if content.trim().is_empty() {
            return Err(AnswerError::Validation(
                "content must not be empty".to_string(),
            ));
        }

        let normalized = normalize(content);
        let content_length = normalized.len();

        let probe_end = content_length.min(self.limits.probe_length);
        let prompt = build_summary_probe(&normalized[..probe_end]);
        let config = GenerationConfig {
            max_output_tokens: self.limits.max_output_tokens,
            temperature: self.limits.temperature,
        };

        let summary = self
            .gateway
            .generate(&prompt, &config, self.limits.gateway_timeout)
            .await
            .map_err(|source| AnswerError::Gateway {
                source,
                content_length,
            })?;

        Ok(ContentProbe {
            content_length,
            summary,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub answer: String,
    pub content_length: usize,
    pub original_length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongAnswer {
    pub answer: String,
    pub chunks_processed: usize,
    pub total_chunks: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentProbe {
    pub content_length: usize,
    pub summary: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("{0}")]
    Validation(String),
    #[error("document not found: {0}")]
    NotFound(DocumentId),
    #[error("document content is empty")]
    EmptyContent(DocumentId),
    #[error("document splits into {total} chunks, over the limit of {limit}")]
    TooManyChunks { total: usize, limit: usize },
    #[error("{source}")]
    Gateway {
        source: GatewayError,
        content_length: usize,
    },
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
