//! LLM — generative-model adapter for the assistant proxy.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`Generate`] trait, not on a concrete client, so
//! route tests can substitute a canned generator. The only production
//! implementation is [`ollama::OllamaClient`], which talks to an Ollama-style
//! `/api/generate` endpoint with streaming disabled.

pub mod config;
pub mod ollama;
pub mod types;

pub use ollama::OllamaClient;
pub use types::{Generate, Generation, LlmError};
