use super::*;

// =============================================================================
// env helpers — unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__XRAI_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__XRAI_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_and_whitespace_tolerant() {
    let key = "__XRAI_EB_MIXED__";
    unsafe { std::env::set_var(key, "  True ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__XRAI_EB_INVALID__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__XRAI_EB_SURELY_UNSET__"), None);
}

#[test]
fn env_parse_reads_value() {
    let key = "__XRAI_EP_PORT__";
    unsafe { std::env::set_var(key, "8080") };
    assert_eq!(env_parse(key, DEFAULT_PORT), 8080);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__XRAI_EP_GARBAGE__";
    unsafe { std::env::set_var(key, "eighty") };
    assert_eq!(env_parse(key, DEFAULT_PORT), DEFAULT_PORT);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_parse("__XRAI_EP_UNSET__", 42_u64), 42);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn from_env_defaults() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ASSISTANT_DISABLED");
    }
    let cfg = ServerConfig::from_env();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(!cfg.assistant_disabled);
}
