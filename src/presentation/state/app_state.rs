use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmGateway};
use crate::application::services::{AnswerService, UploadService};
use crate::presentation::config::Settings;

pub struct AppState<F, G>
where
    F: FileLoader,
    G: LlmGateway,
{
    pub upload_service: Arc<UploadService<F>>,
    pub answer_service: Arc<AnswerService<G>>,
    pub settings: Settings,
}

impl<F, G> Clone for AppState<F, G>
where
    F: FileLoader,
    G: LlmGateway,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            answer_service: Arc::clone(&self.answer_service),
            settings: self.settings.clone(),
        }
    }
}
