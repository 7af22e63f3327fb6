use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_ollama_env() {
    unsafe {
        std::env::remove_var("OLLAMA_BASE_URL");
        std::env::remove_var("OLLAMA_MODEL");
        std::env::remove_var("LLM_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("LLM_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults_to_local_gemma() {
    unsafe { clear_ollama_env() };

    let cfg = OllamaConfig::from_env();
    assert_eq!(cfg.base_url, DEFAULT_OLLAMA_BASE_URL);
    assert_eq!(cfg.model, "gemma:2b");
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.generate_url(), "http://localhost:11434/api/generate");
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_ollama_env();
        std::env::set_var("OLLAMA_BASE_URL", "http://gpu-box:11434/");
        std::env::set_var("OLLAMA_MODEL", "llama3");
        std::env::set_var("LLM_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("LLM_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = OllamaConfig::from_env();
    assert_eq!(cfg.base_url, "http://gpu-box:11434");
    assert_eq!(cfg.model, "llama3");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.generate_url(), "http://gpu-box:11434/api/generate");

    unsafe { clear_ollama_env() };
}

#[test]
fn from_env_blank_values_use_defaults() {
    unsafe {
        clear_ollama_env();
        std::env::set_var("OLLAMA_BASE_URL", "   ");
        std::env::set_var("OLLAMA_MODEL", "");
        std::env::set_var("LLM_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = OllamaConfig::from_env();
    assert_eq!(cfg.base_url, DEFAULT_OLLAMA_BASE_URL);
    assert_eq!(cfg.model, DEFAULT_OLLAMA_MODEL);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);

    unsafe { clear_ollama_env() };
}
