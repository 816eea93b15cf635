mod answer_service;
mod chunk_splitter;
mod content_normalizer;
mod prompt_builder;
mod upload_service;

pub use answer_service::{
    Answer, AnswerError, AnswerLimits, AnswerService, ContentProbe, LongAnswer, PARTIAL_NOTE,
    TRUNCATION_NOTE,
};
pub use chunk_splitter::split_into_chunks;
pub use content_normalizer::{MAX_CONTENT_LENGTH, normalize};
pub use prompt_builder::{FALLBACK_PHRASE, PromptMode, build_answer_prompt, build_summary_probe};
pub use upload_service::{UploadError, UploadService};
