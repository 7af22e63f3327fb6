//! Assistant proxy route.
//!
//! DESIGN
//! ======
//! `POST /gemini/` wraps the question in the shared radiology prompt and
//! forwards it to the configured generative model, so browsers that cannot
//! reach the model directly still get answers. Every failure answers with a
//! JSON `{ "error": ... }` body; the status tells the caller whether to fix
//! the request (400), back off (429), or give up (502/503).

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use xrai_client::net::assistant::radiology_prompt;

use crate::llm::LlmError;
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub transcribed_text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: message.into() }))
}

pub(crate) fn llm_error_to_status(err: &LlmError) -> StatusCode {
    match err {
        LlmError::HttpClientBuild(_) => StatusCode::SERVICE_UNAVAILABLE,
        LlmError::ApiRequest(_) | LlmError::ApiResponse { .. } | LlmError::ApiParse(_) | LlmError::EmptyResponse => {
            StatusCode::BAD_GATEWAY
        }
    }
}

pub(crate) fn rate_limit_error_to_status(_err: &RateLimitError) -> StatusCode {
    StatusCode::TOO_MANY_REQUESTS
}

/// `POST /gemini/` — answer a radiology question through the model.
///
/// # Errors
///
/// - `400`/`415`/`422` when the body is not a JSON `{ transcribed_text }`
/// - `400` when `transcribed_text` is blank
/// - `503` when no model is configured
/// - `429` when the caller or the server is over its request budget
/// - `502` when the model call fails or returns nothing
pub async fn ask(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Result<Json<AssistantRequest>, JsonRejection>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(peer = %peer.ip(), error = %rejection, "assistant request body rejected");
        api_error(rejection.status(), rejection.body_text())
    })?;
    let question = body.transcribed_text.trim();
    if question.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "transcribed_text must not be empty"));
    }

    let Some(generator) = state.generator.as_ref() else {
        return Err(api_error(StatusCode::SERVICE_UNAVAILABLE, "assistant is not configured"));
    };

    if let Err(e) = state.rate_limiter.check_and_record(peer.ip()) {
        tracing::warn!(peer = %peer.ip(), error = %e, "assistant request rate limited");
        return Err(api_error(rate_limit_error_to_status(&e), e.to_string()));
    }

    let prompt = radiology_prompt(question);
    match generator.generate(&prompt).await {
        Ok(generation) => {
            tracing::info!(
                peer = %peer.ip(),
                model = %generation.model,
                prompt_tokens = generation.prompt_tokens,
                output_tokens = generation.output_tokens,
                "assistant reply generated"
            );
            Ok(Json(AssistantResponse { response: generation.text }))
        }
        Err(e) => {
            tracing::error!(
                peer = %peer.ip(),
                model = generator.model(),
                upstream_status = e.upstream_status(),
                error = %e,
                "assistant generation failed"
            );
            Err(api_error(llm_error_to_status(&e), format!("assistant unavailable: {e}")))
        }
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
