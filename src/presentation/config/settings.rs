use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Process-wide configuration: loaded once at startup, read-only after.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub gemini: GeminiSettings,
    pub answer: AnswerSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
}

impl Settings {
    /// Layer `appsettings.{env}.toml` (optional) under `APP`-prefixed
    /// environment variables (`APP_GEMINI__API_KEY` and the like).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Postgres connection string. When absent the service keeps documents
    /// in memory, which is enough for local runs and tests.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: crate::infrastructure::llm::DEFAULT_ENDPOINT.to_string(),
            model: "gemini-pro".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnswerSettings {
    pub gateway_timeout_seconds: u64,
    pub max_output_tokens: u32,
    pub long_max_output_tokens: u32,
    pub temperature: f32,
    pub long_chunk_size: usize,
    pub max_chunks: usize,
    pub probe_length: usize,
}

impl Default for AnswerSettings {
    fn default() -> Self {
        Self {
            gateway_timeout_seconds: 60,
            max_output_tokens: 1000,
            long_max_output_tokens: 800,
            temperature: 0.3,
            long_chunk_size: 15_000,
            max_chunks: 3,
            probe_length: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 25,
        }
    }
}
