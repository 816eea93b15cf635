mod gemini_client;

pub use gemini_client::{DEFAULT_ENDPOINT, GeminiClient};
