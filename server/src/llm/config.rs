//! Generative-model configuration parsed from environment variables.

use crate::config::env_parse;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "gemma:2b";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    /// Endpoint base without trailing slash.
    pub base_url: String,
    pub model: String,
    pub timeouts: LlmTimeouts,
}

impl OllamaConfig {
    /// Build typed model config from environment variables.
    ///
    /// Optional:
    /// - `OLLAMA_BASE_URL`: default `http://localhost:11434`
    /// - `OLLAMA_MODEL`: default `gemma:2b`
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Self {
        let base_url = std::env::var("OLLAMA_BASE_URL")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let model = std::env::var("OLLAMA_MODEL")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_owned());
        let timeouts = LlmTimeouts {
            request_secs: env_parse("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Self { base_url, model, timeouts }
    }

    /// Full URL of the non-streaming generate endpoint.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
