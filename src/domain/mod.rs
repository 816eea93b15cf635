mod document;

pub use document::{ContentType, Document, DocumentId};
