use std::sync::Arc;

use kuching::application::ports::DocumentRepository;
use kuching::application::services::{UploadError, UploadService};
use kuching::infrastructure::persistence::InMemoryDocumentRepository;
use kuching::infrastructure::text_processing::MockFileLoader;

fn service_and_repository() -> (UploadService<MockFileLoader>, Arc<InMemoryDocumentRepository>) {
    let repository = Arc::new(InMemoryDocumentRepository::new());
    let repository_dyn: Arc<dyn DocumentRepository> = repository.clone();
    let service = UploadService::new(Arc::new(MockFileLoader), repository_dyn);
    (service, repository)
}

#[tokio::test]
async fn given_file_with_text_when_uploading_then_stores_extracted_content() {
    let (service, repository) = service_and_repository();

    let document = service
        .upload(b"Paris is the capital of France. ", "capitals.pdf".to_string())
        .await
        .unwrap();

    assert_eq!(document.filename, "capitals.pdf");
    let stored = repository.get_by_id(document.id).await.unwrap().unwrap();
    assert_eq!(stored.content, "Paris is the capital of France. ");
    assert_eq!(stored.uploaded_at, document.uploaded_at);
}

#[tokio::test]
async fn given_file_without_text_when_uploading_then_stores_empty_content() {
    let (service, repository) = service_and_repository();

    let document = service.upload(b"", "blank.pdf".to_string()).await.unwrap();

    let stored = repository.get_by_id(document.id).await.unwrap().unwrap();
    assert!(stored.content.is_empty());
}

#[tokio::test]
async fn given_extraction_failure_when_uploading_then_surfaces_extraction_error() {
    let (service, _repository) = service_and_repository();

    let result = service
        .upload(&[0xff, 0xfe, 0xfd], "broken.pdf".to_string())
        .await;

    assert!(matches!(result, Err(UploadError::Extraction(_))));
}
