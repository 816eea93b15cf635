use kuching::domain::{ContentType, Document, DocumentId};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
}

#[test]
fn given_unknown_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("text/plain"), None);
    assert_eq!(ContentType::from_mime("application/unknown"), None);
}

#[test]
fn given_new_documents_when_created_then_ids_are_unique() {
    let a = Document::new("a.pdf".to_string(), "text".to_string());
    let b = Document::new("b.pdf".to_string(), "text".to_string());
    assert_ne!(a.id, b.id);
}

#[test]
fn given_document_id_when_rendered_and_parsed_then_round_trips() {
    let id = DocumentId::new();
    assert_eq!(DocumentId::parse(&id.to_string()), Some(id));
}

#[test]
fn given_invalid_string_when_parsing_document_id_then_returns_none() {
    assert_eq!(DocumentId::parse("not-a-uuid"), None);
}
