use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use kuching::application::ports::DocumentRepository;
use kuching::application::services::{AnswerLimits, AnswerService, UploadService};
use kuching::infrastructure::llm::GeminiClient;
use kuching::infrastructure::observability::{TracingConfig, init_tracing};
use kuching::infrastructure::persistence::{
    InMemoryDocumentRepository, PgDocumentRepository, create_pool,
};
use kuching::infrastructure::text_processing::PdfAdapter;
use kuching::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let repository: Arc<dyn DocumentRepository> = match &settings.storage.url {
        Some(url) => {
            let pool = create_pool(url, settings.storage.max_connections).await?;
            Arc::new(PgDocumentRepository::new(pool))
        }
        None => {
            tracing::warn!("No storage URL configured, documents are kept in memory");
            Arc::new(InMemoryDocumentRepository::new())
        }
    };

    let file_loader = Arc::new(PdfAdapter::new());
    let gateway = Arc::new(GeminiClient::new(
        &settings.gemini.endpoint,
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
    ));

    let limits = AnswerLimits {
        gateway_timeout: Duration::from_secs(settings.answer.gateway_timeout_seconds),
        max_output_tokens: settings.answer.max_output_tokens,
        long_max_output_tokens: settings.answer.long_max_output_tokens,
        temperature: settings.answer.temperature,
        long_chunk_size: settings.answer.long_chunk_size,
        max_chunks: settings.answer.max_chunks,
        probe_length: settings.answer.probe_length,
    };

    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&file_loader),
        Arc::clone(&repository),
    ));
    let answer_service = Arc::new(AnswerService::new(
        Arc::clone(&repository),
        Arc::clone(&gateway),
        limits,
    ));

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);

    let state = AppState {
        upload_service,
        answer_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
