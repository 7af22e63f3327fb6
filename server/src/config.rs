//! Server configuration parsed from environment variables.
//!
//! Every value has a default, so an empty environment yields a working
//! local setup. `main` loads `.env` (if present) before calling
//! [`ServerConfig::from_env`].

use crate::llm::config::OllamaConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// When set, `/gemini/` answers 503 without calling the model.
    pub assistant_disabled: bool,
    pub ollama: OllamaConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `ASSISTANT_DISABLED`: boolean, default false
    /// - `OLLAMA_*` / `LLM_*_TIMEOUT_SECS`: see [`OllamaConfig::from_env`]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            assistant_disabled: env_bool("ASSISTANT_DISABLED").unwrap_or(false),
            ollama: OllamaConfig::from_env(),
        }
    }
}

/// Parse `key` as `T`, falling back to `default` when unset or malformed.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
