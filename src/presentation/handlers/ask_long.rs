use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmGateway};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ask::{AskRequest, validate_request};
use super::error_mapping::answer_error_response;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskLongResponse {
    pub answer: String,
    pub chunks_processed: usize,
    pub total_chunks: usize,
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_long_handler<F, G>(
    State(state): State<AppState<F, G>>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: LlmGateway + 'static,
{
    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing long-path ask request");

    let document_id = match validate_request(&request) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };

    match state
        .answer_service
        .ask_long(&request.question, document_id)
        .await
    {
        Ok(answer) => {
            tracing::info!(
                chunks_processed = answer.chunks_processed,
                total_chunks = answer.total_chunks,
                "Long-path question answered"
            );
            (
                StatusCode::OK,
                Json(AskLongResponse {
                    answer: answer.answer,
                    chunks_processed: answer.chunks_processed,
                    total_chunks: answer.total_chunks,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Long-path ask failed");
            answer_error_response(e)
        }
    }
}
