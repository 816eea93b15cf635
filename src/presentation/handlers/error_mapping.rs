use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{GatewayError, RejectionKind};
use crate::application::services::AnswerError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            suggestion: None,
        }
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Map every answer-pipeline failure to a distinct status so clients can
/// present differentiated guidance. Gateway rejections pass the provider's
/// status code through.
pub fn answer_error_response(err: AnswerError) -> Response {
    let (status, body) = classify(err);
    (status, Json(body)).into_response()
}

pub fn classify(err: AnswerError) -> (StatusCode, ErrorResponse) {
    match err {
        AnswerError::Validation(message) => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
        AnswerError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("Document not found"),
        ),
        AnswerError::EmptyContent(_) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("Document content is empty"),
        ),
        AnswerError::TooManyChunks { total, limit } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                "Document is too long for processing. Please upload a shorter document (under 5-6 pages).",
            )
            .with_details(format!("{total} chunks at the current size, limit is {limit}"))
            .with_suggestion(
                "Try splitting your document into smaller parts or focus on a specific section.",
            ),
        ),
        AnswerError::Gateway {
            source,
            content_length,
        } => gateway_response(source, content_length),
        AnswerError::Repository(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("Error answering question").with_details(e.to_string()),
        ),
    }
}

fn gateway_response(err: GatewayError, content_length: usize) -> (StatusCode, ErrorResponse) {
    match err {
        GatewayError::Timeout { .. } => (
            StatusCode::REQUEST_TIMEOUT,
            ErrorResponse::new(
                "Request timeout - The AI took too long to respond. Try a shorter document or simpler question.",
            ),
        ),
        GatewayError::Unreachable(details) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("Cannot connect to the Gemini API. Check your internet connection.")
                .with_details(details),
        ),
        GatewayError::Rejected { kind, status } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            ErrorResponse::new(rejection_message(kind, status))
                .with_details(format!("Content length: {content_length} characters")),
        ),
        GatewayError::Protocol(details) => (
            StatusCode::BAD_GATEWAY,
            ErrorResponse::new("Unexpected response format from the Gemini API")
                .with_details(details),
        ),
    }
}

fn rejection_message(kind: RejectionKind, status: u16) -> String {
    match kind {
        RejectionKind::OversizedContent => {
            "Document content is too long or contains unsupported content. Try uploading a shorter document or one with simpler formatting.".to_string()
        }
        RejectionKind::MalformedRequest => {
            "Bad request. The document might be too long or contain complex formatting.".to_string()
        }
        RejectionKind::AuthRejected => {
            "API key rejected. Please check your Gemini API key and ensure the API is enabled.".to_string()
        }
        RejectionKind::RateLimited => {
            "Rate limit exceeded. Please try again in a moment.".to_string()
        }
        RejectionKind::ProviderFault => {
            "Gemini API server error. Please try again later.".to_string()
        }
        RejectionKind::Unclassified => format!("Gemini API error: {status}"),
    }
}
