use crate::application::ports::{FileLoader, FileLoaderError};

/// Treats the uploaded bytes as UTF-8 text. Used by the test suite and by
/// local runs that exercise the ask pipeline without real PDFs.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], _filename: &str) -> Result<String, FileLoaderError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
