mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnswerSettings, ExtractionSettings, GeminiSettings, LoggingSettings, ServerSettings, Settings,
    StorageSettings,
};
