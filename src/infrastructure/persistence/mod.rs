mod in_memory_document_repository;
mod pg_document_repository;
mod pg_pool;

pub use in_memory_document_repository::InMemoryDocumentRepository;
pub use pg_document_repository::PgDocumentRepository;
pub use pg_pool::create_pool;
