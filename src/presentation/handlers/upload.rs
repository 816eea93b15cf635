use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmGateway};
use crate::domain::ContentType;
use crate::presentation::state::AppState;

use super::error_mapping::ErrorResponse;

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub filename: String,
    pub message: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, G>(
    State(state): State<AppState<F, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    G: LlmGateway + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No file uploaded")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to read multipart: {e}"))),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type_str = field.content_type().unwrap_or("application/octet-stream");

    tracing::debug!(filename = %filename, content_type = %content_type_str, "Processing file upload");

    if ContentType::from_mime(content_type_str).is_none() {
        tracing::warn!(content_type = %content_type_str, "Unsupported content type");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse::new("Only PDF files are supported")),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to read file: {e}"))),
            )
                .into_response();
        }
    };

    match state.upload_service.upload(&data, filename).await {
        Ok(document) => (
            StatusCode::OK,
            Json(UploadResponse {
                id: document.id.to_string(),
                filename: document.filename,
                message: "File uploaded and saved!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Upload failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error uploading document").with_details(e.to_string())),
            )
                .into_response()
        }
    }
}
