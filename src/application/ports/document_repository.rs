use async_trait::async_trait;

use crate::domain::{Document, DocumentId};

use super::RepositoryError;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn create(&self, document: &Document) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError>;
}
