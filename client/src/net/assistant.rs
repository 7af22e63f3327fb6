//! Assistant backends for the chat widget.
//!
//! Client-side (hydrate): direct and proxied calls go out via `gloo-net`;
//! the simulated backend waits on a `gloo-timers` sleep.
//! Server-side (SSR) and native tests: network backends return
//! [`ClientError::Unavailable`]; the simulator answers without delay.
//!
//! DESIGN
//! ======
//! Every backend resolves to `Result<String, ClientError>` so the chat state
//! settles the same way regardless of which one produced the reply.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use super::types::ClientError;
#[cfg(feature = "hydrate")]
use super::types::{GenerateRequest, ProxyRequest, parse_reply};
use crate::config::ClientConfig;

/// Where chat messages are answered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssistantBackend {
    /// Local generative model at `/api/generate`.
    #[default]
    Direct,
    /// Backend proxy at `/gemini/`, which builds the prompt itself.
    Proxied,
    /// Canned replies, no network.
    Simulated,
}

impl AssistantBackend {
    pub const ALL: [Self; 3] = [Self::Direct, Self::Proxied, Self::Simulated];

    pub fn key(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Proxied => "proxied",
            Self::Simulated => "simulated",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Direct => "Local model",
            Self::Proxied => "Backend",
            Self::Simulated => "Offline demo",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }
}

/// Canned fracture notes; `{question}` is replaced with the user's text.
pub const CANNED_REPLIES: [&str; 5] = [
    "You asked: \"{question}\". Fractures are described by the course of the fracture line. On radiographs look for cortical discontinuity, trabecular disruption and displacement of the fragments.",
    "Regarding \"{question}\": greenstick fractures occur mostly in children, where the pliable diaphysis bends and cracks on the convex side while the concave cortex stays intact.",
    "I understood your question as \"{question}\". A comminuted fracture has three or more fragments, usually after high-energy trauma; CT helps assess articular surface involvement.",
    "On \"{question}\": hairline (stress) fractures can stay radiographically occult for 10 to 14 days. A periosteal reaction or sclerotic band often appears on follow-up films.",
    "About \"{question}\": a spiral fracture runs helically along the long axis of the diaphysis and points to a rotational mechanism of injury.",
];

/// Prompt sent to the generative model for a radiologist's question.
pub fn radiology_prompt(question: &str) -> String {
    format!(
        concat!(
            "You are working with a radiologist who has extensive knowledge of bone fractures ",
            "and detecting them on X-ray images.\n",
            "The radiologist asks: {question}\n",
            "\n",
            "Please respond with a brief answer that:\n",
            "- Is well supported with science\n",
            "- Uses anatomical terms as much as possible\n",
            "- Always repeats what you understood of their prompt to ensure your response answers them well\n",
            "\n",
            "Keep the response limited to 7 sentences maximum."
        ),
        question = question
    )
}

/// Fill canned reply `index` (wrapped to the table size) with the question.
pub fn canned_reply(question: &str, index: usize) -> String {
    CANNED_REPLIES[index % CANNED_REPLIES.len()].replace("{question}", question)
}

/// Uniformly random index into [`CANNED_REPLIES`].
#[allow(clippy::cast_possible_truncation)]
fn random_reply_index() -> usize {
    (uuid::Uuid::new_v4().as_u128() % CANNED_REPLIES.len() as u128) as usize
}

/// Ask the selected backend to answer `text`.
///
/// # Errors
///
/// Returns a [`ClientError`] when the backend cannot be reached, answers with
/// a non-OK status, or returns an unusable body.
pub async fn ask(backend: AssistantBackend, config: &ClientConfig, text: &str) -> Result<String, ClientError> {
    match backend {
        AssistantBackend::Direct => ask_direct(&config.generate_url, &config.model, text).await,
        AssistantBackend::Proxied => ask_proxied(&config.proxy_endpoint(), text).await,
        AssistantBackend::Simulated => Ok(simulate(config.simulated_delay_ms, text).await),
    }
}

async fn ask_direct(url: &str, model: &str, text: &str) -> Result<String, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let prompt = radiology_prompt(text);
        let body = GenerateRequest { model, prompt: &prompt, stream: false };
        let resp = gloo_net::http::Request::post(url)
            .json(&body)
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("generate endpoint returned {}", resp.status());
            return Err(ClientError::Status(resp.status()));
        }
        let raw = resp.text().await.map_err(|e| ClientError::Decode(e.to_string()))?;
        parse_reply(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, model, text);
        Err(ClientError::Unavailable)
    }
}

async fn ask_proxied(endpoint: &str, text: &str) -> Result<String, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ProxyRequest { transcribed_text: text };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&body)
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("assistant proxy returned {}", resp.status());
            return Err(ClientError::Status(resp.status()));
        }
        let raw = resp.text().await.map_err(|e| ClientError::Decode(e.to_string()))?;
        parse_reply(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, text);
        Err(ClientError::Unavailable)
    }
}

async fn simulate(delay_ms: u32, text: &str) -> String {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = delay_ms;

    canned_reply(text, random_reply_index())
}
