use super::*;

#[test]
fn upstream_status_only_for_http_responses() {
    let err = LlmError::ApiResponse { status: 500, body: "boom".into() };
    assert_eq!(err.upstream_status(), Some(500));
    assert_eq!(LlmError::ApiRequest("refused".into()).upstream_status(), None);
    assert_eq!(LlmError::EmptyResponse.upstream_status(), None);
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(LlmError::ApiResponse { status: 404, body: String::new() }.to_string(), "API response error: status 404");
    assert_eq!(LlmError::EmptyResponse.to_string(), "model returned an empty response");
    assert!(LlmError::ApiParse("eof".into()).to_string().contains("eof"));
}
