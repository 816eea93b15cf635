use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{Document, DocumentId};

pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self, document), fields(document_id = %document.id))]
    async fn create(&self, document: &Document) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO documents (id, filename, content, uploaded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(document.id.as_uuid())
        .bind(&document.filename)
        .bind(&document.content)
        .bind(document.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(document_id = %id))]
    async fn get_by_id(&self, id: DocumentId) -> Result<Option<Document>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, content, uploaded_at
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(r) => {
                let id: Uuid = r
                    .try_get("id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                let filename: String = r
                    .try_get("filename")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                let content: String = r
                    .try_get("content")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                let uploaded_at: DateTime<Utc> = r
                    .try_get("uploaded_at")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

                Ok(Some(Document {
                    id: DocumentId::from_uuid(id),
                    filename,
                    content,
                    uploaded_at,
                }))
            }
            None => Ok(None),
        }
    }
}
