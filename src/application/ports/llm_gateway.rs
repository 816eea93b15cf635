use std::time::Duration;

use async_trait::async_trait;

/// Single synchronous call/response integration with the LLM provider.
///
/// The timeout is a first-class parameter: implementations must cancel the
/// in-flight request when it expires and return [`GatewayError::Timeout`],
/// releasing anything held. One attempt per call; callers never retry
/// because the provider is a paid metered service.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        timeout: Duration,
    ) -> Result<String, GatewayError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 1000,
            temperature: 0.3,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway unreachable: {0}")]
    Unreachable(String),
    #[error("gateway call timed out after {limit:?}")]
    Timeout { limit: Duration },
    #[error("gateway rejected request ({kind}, status {status})")]
    Rejected { kind: RejectionKind, status: u16 },
    #[error("gateway protocol error: {0}")]
    Protocol(String),
}

/// Sub-classification of a non-success provider status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// Client-side content or size problem flagged by the provider.
    OversizedContent,
    MalformedRequest,
    AuthRejected,
    RateLimited,
    ProviderFault,
    Unclassified,
}

impl RejectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OversizedContent => "oversized content",
            Self::MalformedRequest => "malformed request",
            Self::AuthRejected => "auth rejected",
            Self::RateLimited => "rate limited",
            Self::ProviderFault => "provider fault",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
