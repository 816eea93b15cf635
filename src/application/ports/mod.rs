mod document_repository;
mod file_loader;
mod llm_gateway;
mod repository_error;

pub use document_repository::DocumentRepository;
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_gateway::{GatewayError, GenerationConfig, LlmGateway, RejectionKind};
pub use repository_error::RepositoryError;
