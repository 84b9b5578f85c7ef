use super::*;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_code_missing_api_key() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[test]
fn error_code_api_response() {
    let err = LlmError::ApiResponse { status: 500, body: "oops".into() };
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}

#[test]
fn error_code_http_client_build() {
    let err = LlmError::HttpClientBuild("tls".into());
    assert_eq!(err.error_code(), "E_HTTP_CLIENT_BUILD");
}

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_transport_and_server_errors() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
    assert!(LlmError::ApiResponse { status: 429, body: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: String::new() }.retryable());
}

#[test]
fn not_retryable_client_errors() {
    assert!(!LlmError::ApiResponse { status: 400, body: String::new() }.retryable());
    assert!(!LlmError::ApiParse("eof".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "K".into() }.retryable());
}

// =============================================================================
// Message
// =============================================================================

#[test]
fn message_constructors_set_role() {
    assert_eq!(Message::user("hi").role, Role::User);
    assert_eq!(Message::assistant("hello").role, Role::Assistant);
}
