//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the generative-model client (absent when the assistant is
//! disabled or failed to initialize) and the request rate limiter.

use std::sync::Arc;

use crate::llm::Generate;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub generator: Option<Arc<dyn Generate>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Option<Arc<dyn Generate>>, rate_limiter: RateLimiter) -> Self {
        Self { generator, rate_limiter }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
