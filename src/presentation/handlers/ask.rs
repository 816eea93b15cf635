use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmGateway};
use crate::domain::DocumentId;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_mapping::{ErrorResponse, answer_error_response};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub doc_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
    pub content_length: usize,
    pub original_length: usize,
}

/// Parse and validate the shared `{ question, docId }` body shape.
pub(super) fn validate_request(
    request: &AskRequest,
) -> Result<DocumentId, (StatusCode, Json<ErrorResponse>)> {
    if request.question.trim().is_empty() || request.doc_id.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Question and document ID are required")),
        ));
    }

    DocumentId::parse(request.doc_id.trim()).ok_or((
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Invalid document ID")),
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: LlmGateway + 'static,
{
    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing ask request");

    let document_id = match validate_request(&request) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };

    match state
        .answer_service
        .ask(&request.question, document_id)
        .await
    {
        Ok(answer) => {
            tracing::info!(
                content_length = answer.content_length,
                original_length = answer.original_length,
                "Question answered"
            );
            (
                StatusCode::OK,
                Json(AskResponse {
                    answer: answer.answer,
                    model: state.settings.gemini.model.clone(),
                    content_length: answer.content_length,
                    original_length: answer.original_length,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Ask failed");
            answer_error_response(e)
        }
    }
}
