use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;

use kuching::application::ports::{
    DocumentRepository, GatewayError, GenerationConfig, LlmGateway, RejectionKind,
};
use kuching::application::services::{
    AnswerError, AnswerLimits, AnswerService, MAX_CONTENT_LENGTH, PARTIAL_NOTE, TRUNCATION_NOTE,
};
use kuching::domain::{Document, DocumentId};
use kuching::infrastructure::persistence::InMemoryDocumentRepository;

const TEST_CHUNK_SIZE: usize = 40;
const STATIC_ANSWER: &str = "A static answer.";

struct StaticGateway {
    answer: &'static str,
    calls: AtomicUsize,
}

impl StaticGateway {
    fn new(answer: &'static str) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl LlmGateway for StaticGateway {
    async fn generate(
        &self,
        _prompt: &str,
        _config: &GenerationConfig,
        _timeout: Duration,
    ) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.to_string())
    }
}

struct RejectingGateway {
    kind: RejectionKind,
    status: u16,
}

#[async_trait::async_trait]
impl LlmGateway for RejectingGateway {
    async fn generate(
        &self,
        _prompt: &str,
        _config: &GenerationConfig,
        _timeout: Duration,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Rejected {
            kind: self.kind,
            status: self.status,
        })
    }
}

struct TimeoutGateway;

#[async_trait::async_trait]
impl LlmGateway for TimeoutGateway {
    async fn generate(
        &self,
        _prompt: &str,
        _config: &GenerationConfig,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        tokio::time::sleep(timeout).await;
        Err(GatewayError::Timeout { limit: timeout })
    }
}

/// Records the prompt it was called with.
struct CapturingGateway {
    last_prompt: Mutex<Option<String>>,
}

impl CapturingGateway {
    fn new() -> Self {
        Self {
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl LlmGateway for CapturingGateway {
    async fn generate(
        &self,
        prompt: &str,
        _config: &GenerationConfig,
        _timeout: Duration,
    ) -> Result<String, GatewayError> {
        *self.last_prompt.lock().await = Some(prompt.to_string());
        Ok("captured".to_string())
    }
}

fn test_limits() -> AnswerLimits {
    AnswerLimits {
        gateway_timeout: Duration::from_millis(50),
        long_chunk_size: TEST_CHUNK_SIZE,
        ..AnswerLimits::default()
    }
}

async fn service_with_document<G: LlmGateway + 'static>(
    gateway: Arc<G>,
    content: &str,
) -> (AnswerService<G>, DocumentId) {
    let repository = Arc::new(InMemoryDocumentRepository::new());
    let document = Document::new("test.pdf".to_string(), content.to_string());
    let document_id = document.id;
    repository.create(&document).await.unwrap();

    (
        AnswerService::new(repository, gateway, test_limits()),
        document_id,
    )
}

#[tokio::test]
async fn given_unknown_document_when_asking_then_fails_with_not_found() {
    let (service, _) = service_with_document(Arc::new(StaticGateway::new(STATIC_ANSWER)), "x").await;

    let result = service.ask("A question?", DocumentId::new()).await;

    assert!(matches!(result, Err(AnswerError::NotFound(_))));
}

#[tokio::test]
async fn given_blank_question_when_asking_then_fails_with_validation_error() {
    let (service, document_id) =
        service_with_document(Arc::new(StaticGateway::new(STATIC_ANSWER)), "content").await;

    let result = service.ask("   ", document_id).await;

    assert!(matches!(result, Err(AnswerError::Validation(_))));
}

#[tokio::test]
async fn given_whitespace_only_content_when_asking_then_fails_with_empty_content() {
    let (service, document_id) =
        service_with_document(Arc::new(StaticGateway::new(STATIC_ANSWER)), "  \n  ").await;

    let result = service.ask("A question?", document_id).await;

    assert!(matches!(result, Err(AnswerError::EmptyContent(_))));
}

#[tokio::test]
async fn given_untruncated_content_when_asking_then_answer_has_no_truncation_note() {
    let (service, document_id) =
        service_with_document(Arc::new(StaticGateway::new(STATIC_ANSWER)), "short content").await;

    let answer = service.ask("A question?", document_id).await.unwrap();

    assert_eq!(answer.answer, STATIC_ANSWER);
    assert_eq!(answer.content_length, answer.original_length);
}

#[tokio::test]
async fn given_oversized_content_when_asking_then_appends_truncation_note() {
    let content = "x".repeat(MAX_CONTENT_LENGTH + 100);
    let (service, document_id) =
        service_with_document(Arc::new(StaticGateway::new(STATIC_ANSWER)), &content).await;

    let answer = service.ask("A question?", document_id).await.unwrap();

    assert!(answer.answer.ends_with(TRUNCATION_NOTE));
    assert_eq!(answer.content_length, MAX_CONTENT_LENGTH);
    assert_eq!(answer.original_length, MAX_CONTENT_LENGTH + 100);
}

#[tokio::test]
async fn given_slow_gateway_when_asking_then_fails_with_timeout() {
    let (service, document_id) =
        service_with_document(Arc::new(TimeoutGateway), "content").await;

    let result = service.ask("A question?", document_id).await;

    assert!(matches!(
        result,
        Err(AnswerError::Gateway {
            source: GatewayError::Timeout { .. },
            ..
        })
    ));
}

#[tokio::test]
async fn given_rate_limited_gateway_when_asking_then_carries_rejection_and_content_length() {
    let gateway = Arc::new(RejectingGateway {
        kind: RejectionKind::RateLimited,
        status: 429,
    });
    let (service, document_id) = service_with_document(gateway, "some content").await;

    let result = service.ask("A question?", document_id).await;

    match result {
        Err(AnswerError::Gateway {
            source: GatewayError::Rejected { kind, status },
            content_length,
        }) => {
            assert_eq!(kind, RejectionKind::RateLimited);
            assert_eq!(status, 429);
            assert_eq!(content_length, "some content".len());
        }
        other => panic!("expected rejected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_two_chunk_document_when_asking_long_then_uses_first_chunk_only() {
    let gateway = Arc::new(StaticGateway::new(STATIC_ANSWER));
    let content = "Paris is the capital of France. Paris is the capital of France. ";
    let (service, document_id) = service_with_document(Arc::clone(&gateway), content).await;

    let answer = service.ask_long("A question?", document_id).await.unwrap();

    assert_eq!(answer.chunks_processed, 1);
    assert_eq!(answer.total_chunks, 2);
    assert!(answer.answer.ends_with(PARTIAL_NOTE));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_single_chunk_document_when_asking_long_then_omits_partial_note() {
    let (service, document_id) =
        service_with_document(Arc::new(StaticGateway::new(STATIC_ANSWER)), "Tiny text. ").await;

    let answer = service.ask_long("A question?", document_id).await.unwrap();

    assert_eq!(answer.total_chunks, 1);
    assert_eq!(answer.answer, STATIC_ANSWER);
}

#[tokio::test]
async fn given_document_over_chunk_ceiling_when_asking_long_then_fails_without_gateway_call() {
    let gateway = Arc::new(StaticGateway::new(STATIC_ANSWER));
    let content = "Paris is the capital of France. ".repeat(4);
    let (service, document_id) = service_with_document(Arc::clone(&gateway), &content).await;

    let result = service.ask_long("A question?", document_id).await;

    match result {
        Err(AnswerError::TooManyChunks { total, limit }) => {
            assert_eq!(total, 4);
            assert_eq!(limit, 3);
        }
        other => panic!("expected too-many-chunks error, got {other:?}"),
    }
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_long_content_when_testing_content_then_probe_is_bounded() {
    let gateway = Arc::new(CapturingGateway::new());
    let repository = Arc::new(InMemoryDocumentRepository::new());
    let service = AnswerService::new(repository, Arc::clone(&gateway), test_limits());

    let content = "word ".repeat(2000);
    let probe = service.test_content(&content).await.unwrap();

    assert!(probe.content_length > test_limits().probe_length);
    let prompt = gateway.last_prompt.lock().await.clone().unwrap();
    let prefix = "Please summarize this text in one sentence: ";
    assert!(prompt.len() <= prefix.len() + test_limits().probe_length);
}

#[tokio::test]
async fn given_empty_content_when_testing_content_then_fails_with_validation_error() {
    let repository = Arc::new(InMemoryDocumentRepository::new());
    let service = AnswerService::new(
        repository,
        Arc::new(StaticGateway::new(STATIC_ANSWER)),
        test_limits(),
    );

    let result = service.test_content("   ").await;

    assert!(matches!(result, Err(AnswerError::Validation(_))));
}
