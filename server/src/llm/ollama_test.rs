use super::*;
use crate::llm::config::LlmTimeouts;

// =============================================================================
// parse_response
// =============================================================================

#[test]
fn parse_full_response() {
    let json = serde_json::json!({
        "model": "gemma:2b",
        "created_at": "2024-05-01T12:00:00Z",
        "response": "A greenstick fracture is an incomplete fracture.",
        "done": true,
        "context": [1, 2, 3],
        "prompt_eval_count": 120,
        "eval_count": 48
    })
    .to_string();

    let generation = parse_response(&json, "gemma:2b").unwrap();
    assert_eq!(generation.text, "A greenstick fracture is an incomplete fracture.");
    assert_eq!(generation.model, "gemma:2b");
    assert_eq!(generation.prompt_tokens, Some(120));
    assert_eq!(generation.output_tokens, Some(48));
}

#[test]
fn parse_minimal_response_uses_requested_model() {
    let generation = parse_response(r#"{"response":"ok"}"#, "llama3").unwrap();
    assert_eq!(generation.text, "ok");
    assert_eq!(generation.model, "llama3");
    assert_eq!(generation.prompt_tokens, None);
    assert_eq!(generation.output_tokens, None);
}

#[test]
fn parse_blank_response_is_empty_error() {
    assert!(matches!(parse_response(r#"{"response":"  \n"}"#, "m"), Err(LlmError::EmptyResponse)));
}

#[test]
fn parse_missing_response_field_errors() {
    assert!(matches!(parse_response(r#"{"done":true}"#, "m"), Err(LlmError::ApiParse(_))));
}

#[test]
fn parse_invalid_json_errors() {
    assert!(matches!(parse_response("not json", "m"), Err(LlmError::ApiParse(_))));
}

// =============================================================================
// generate against a local stand-in endpoint
// =============================================================================

async fn spawn_endpoint(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> OllamaClient {
    let config = OllamaConfig {
        base_url,
        model: "gemma:2b".into(),
        timeouts: LlmTimeouts { request_secs: 5, connect_secs: 2 },
    };
    OllamaClient::new(&config).unwrap()
}

#[tokio::test]
async fn generate_posts_non_streaming_request() {
    let router = axum::Router::new().route(
        "/api/generate",
        axum::routing::post(|axum::Json(body): axum::Json<serde_json::Value>| async move {
            assert_eq!(body["model"], "gemma:2b");
            assert_eq!(body["stream"], false);
            let prompt = body["prompt"].as_str().unwrap_or_default().to_owned();
            axum::Json(serde_json::json!({ "model": "gemma:2b", "response": format!("echo: {prompt}"), "done": true }))
        }),
    );
    let client = client_for(spawn_endpoint(router).await);

    let generation = client.generate("hello").await.unwrap();
    assert_eq!(generation.text, "echo: hello");
    assert_eq!(client.model(), "gemma:2b");
}

#[tokio::test]
async fn generate_maps_error_status() {
    let router = axum::Router::new().route(
        "/api/generate",
        axum::routing::post(|| async { (axum::http::StatusCode::NOT_FOUND, "model 'gemma:2b' not found") }),
    );
    let client = client_for(spawn_endpoint(router).await);

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, LlmError::ApiResponse { status: 404, ref body } if body.contains("not found")));
}

#[tokio::test]
async fn generate_unreachable_is_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(format!("http://{addr}"));

    assert!(matches!(client.generate("hello").await, Err(LlmError::ApiRequest(_))));
}
