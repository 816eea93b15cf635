use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, FileLoaderError> {
        let bytes = data.to_vec();

        // pdf-extract is CPU-bound and not async; run it off the runtime
        // and bound it so a pathological file cannot wedge an upload.
        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        if text.trim().is_empty() {
            tracing::warn!("No extractable text found in PDF");
        } else {
            tracing::info!(text_length = text.len(), "PDF text extraction complete");
        }

        Ok(text)
    }
}
