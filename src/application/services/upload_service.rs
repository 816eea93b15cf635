use std::sync::Arc;

use crate::application::ports::{
    DocumentRepository, FileLoader, FileLoaderError, RepositoryError,
};
use crate::domain::Document;

/// Extract-then-store flow behind `POST /upload`.
pub struct UploadService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    repository: Arc<dyn DocumentRepository>,
}

impl<F> UploadService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>, repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            file_loader,
            repository,
        }
    }

    pub async fn upload(&self, data: &[u8], filename: String) -> Result<Document, UploadError> {
        let text = self
            .file_loader
            .extract_text(data, &filename)
            .await
            .map_err(UploadError::Extraction)?;

        if text.trim().is_empty() {
            tracing::warn!(filename = %filename, "Upload contains no extractable text");
        }

        let document = Document::new(filename, text);
        self.repository
            .create(&document)
            .await
            .map_err(UploadError::Storage)?;

        tracing::info!(
            document_id = %document.id,
            filename = %document.filename,
            content_length = document.content.len(),
            "Document stored"
        );

        Ok(document)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
}
