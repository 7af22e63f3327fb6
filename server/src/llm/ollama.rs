//! Ollama-style `/api/generate` client.
//!
//! Thin HTTP wrapper with streaming disabled, so the endpoint answers with a
//! single JSON object. Pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::config::OllamaConfig;
use super::types::{Generate, Generation, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OllamaClient {
    http: reqwest::Client,
    generate_url: String,
    model: String,
}

impl OllamaClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &OllamaConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, generate_url: config.generate_url(), model: config.model.clone() })
    }
}

#[async_trait::async_trait]
impl Generate for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<Generation, LlmError> {
        let body = ApiRequest { model: &self.model, prompt, stream: false };

        let response = self
            .http
            .post(&self.generate_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text, &self.model)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    response: String,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u64>,
    #[serde(default)]
    eval_count: Option<u64>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str, requested_model: &str) -> Result<Generation, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    if api.response.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(Generation {
        text: api.response,
        model: api.model.unwrap_or_else(|| requested_model.to_owned()),
        prompt_tokens: api.prompt_eval_count,
        output_tokens: api.eval_count,
    })
}

#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;
