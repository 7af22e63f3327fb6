//! LLM types — generation result, errors, and the generator seam.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by generative-model calls.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request to the model endpoint failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The model endpoint returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The model endpoint response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The model answered with a blank `response`.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// HTTP status reported upstream, when the endpoint answered at all.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ApiResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// One completed, non-streaming generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub model: String,
    pub prompt_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Prompt-in, text-out model call.
#[async_trait::async_trait]
pub trait Generate: Send + Sync {
    /// Run `prompt` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] when the endpoint is unreachable, answers with a
    /// non-success status, or returns an unusable body.
    async fn generate(&self, prompt: &str) -> Result<Generation, LlmError>;

    /// Configured model name.
    fn model(&self) -> &str;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
