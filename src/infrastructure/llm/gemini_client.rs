use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{GatewayError, GenerationConfig, LlmGateway, RejectionKind};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini `generateContent` adapter.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(endpoint: &str, api_key: String, model: String) -> Self {
        // No client-level timeout: the per-call timeout parameter on the
        // port is the only cancellation mechanism.
        let client = Client::new();
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn classify_rejection(status: u16, body: &str) -> RejectionKind {
        match status {
            // Gemini flags oversized or unsupported input as a 400 whose
            // body mentions the content or the token count.
            400 if body.contains("content") || body.contains("token") => {
                RejectionKind::OversizedContent
            }
            400 => RejectionKind::MalformedRequest,
            401 | 403 => RejectionKind::AuthRejected,
            429 => RejectionKind::RateLimited,
            s if s >= 500 => RejectionKind::ProviderFault,
            _ => RejectionKind::Unclassified,
        }
    }

    async fn call(&self, prompt: &str, config: &GenerationConfig) -> Result<String, GatewayError> {
        let url = format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "maxOutputTokens": config.max_output_tokens,
                "temperature": config.temperature,
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status, "Gemini rejected generate request");
            return Err(GatewayError::Rejected {
                kind: Self::classify_rejection(status, &text),
                status,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Protocol(format!("response parse failed: {e}")))?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                GatewayError::Protocol("response missing candidate content".to_string())
            })
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    #[tracing::instrument(skip(self, prompt, config), fields(prompt_length = prompt.len()))]
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        tokio::time::timeout(timeout, self.call(prompt, config))
            .await
            .map_err(|_| GatewayError::Timeout { limit: timeout })?
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
