//! Wire types for the upload service and the assistant backends.
//!
//! ERROR HANDLING
//! ==============
//! Every outbound call resolves to `Result<_, ClientError>`. Callers do not
//! distinguish transport failures from non-OK statuses: both are surfaced the
//! same way (alert for uploads, fallback reply for chat). Validation outcomes
//! (empty input, disallowed file type) never reach this layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::format;

/// Classification returned by `POST /upload/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predicted_class: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisResult {
    /// Confidence as rendered in the result card, e.g. `"87.34%"`.
    pub fn confidence_label(&self) -> String {
        format::confidence_percent(self.confidence)
    }

    pub fn confidence_in_range(&self) -> bool {
        format::confidence_in_range(self.confidence)
    }
}

/// Body for the generative-model `/api/generate` endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Body for the backend `/gemini/` proxy.
#[derive(Debug, Serialize)]
pub struct ProxyRequest<'a> {
    pub transcribed_text: &'a str,
}

/// Shared reply shape of `/api/generate` and `/gemini/`.
///
/// `/api/generate` returns many more fields; only `response` is read.
#[derive(Debug, Deserialize)]
pub struct AssistantReply {
    pub response: String,
}

/// Failure of an outbound call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, refused, CORS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The success body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The backend answered with an empty reply.
    #[error("empty reply")]
    EmptyReply,

    /// The call was attempted outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Decode an upload success body.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] if the body is not an analysis result.
pub fn parse_analysis(body: &str) -> Result<AnalysisResult, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Decode an assistant success body into the reply text.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] for malformed bodies and
/// [`ClientError::EmptyReply`] when `response` is blank.
pub fn parse_reply(body: &str) -> Result<String, ClientError> {
    let reply: AssistantReply = serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    if reply.response.trim().is_empty() {
        return Err(ClientError::EmptyReply);
    }
    Ok(reply.response)
}
