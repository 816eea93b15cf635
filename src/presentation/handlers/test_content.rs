use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmGateway};
use crate::application::services::AnswerError;
use crate::presentation::state::AppState;

use super::error_mapping::{ErrorResponse, classify};

#[derive(Deserialize)]
pub struct TestContentRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestContentResponse {
    pub success: bool,
    pub message: String,
    pub content_length: usize,
    pub summary: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestContentFailure {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<usize>,
}

/// Diagnostic probe: validates that a given piece of content is
/// gateway-compatible before a client commits to a real question flow.
#[tracing::instrument(skip(state, request))]
pub async fn test_content_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<TestContentRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: LlmGateway + 'static,
{
    if request.content.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Content is required")),
        )
            .into_response();
    }

    match state.answer_service.test_content(&request.content).await {
        Ok(probe) => (
            StatusCode::OK,
            Json(TestContentResponse {
                success: true,
                message: "Content test passed!".to_string(),
                content_length: probe.content_length,
                summary: probe.summary,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Content test failed");
            let content_length = match &e {
                AnswerError::Gateway { content_length, .. } => Some(*content_length),
                _ => None,
            };
            let (status, body) = classify(e);
            (
                status,
                Json(TestContentFailure {
                    success: false,
                    error: body.error,
                    content_length,
                }),
            )
                .into_response()
        }
    }
}
