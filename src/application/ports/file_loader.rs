use async_trait::async_trait;

#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Extract plain text from uploaded file bytes.
    ///
    /// Returns an empty string when the file parses but contains no
    /// extractable text; the stored document then fails the ask path with
    /// an empty-content error instead of failing the upload.
    async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
