use tiltcheck::domain::error::{
    extract_body_message, status_message, ApiError, FALLBACK_ERROR_MESSAGE,
    NETWORK_ERROR_MESSAGE, TIMEOUT_ERROR_MESSAGE,
};

#[test]
fn status_table_matches_fixed_strings() {
    let expected = [
        (400, "Invalid request. Please check your input and try again."),
        (401, "Your session has expired. Please sign in again."),
        (403, "You don't have access to this resource."),
        (404, "The requested resource was not found."),
        (413, "That file is too large to upload."),
        (429, "Too many requests. Please wait a moment and try again."),
        (500, "The server hit an unexpected error. Please try again."),
        (
            503,
            "The service is temporarily unavailable. Please try again shortly.",
        ),
    ];
    for (status, message) in expected {
        assert_eq!(status_message(status), Some(message), "status {status}");
    }
    assert_eq!(status_message(418), None);
    assert_eq!(status_message(200), None);
}

#[test]
fn network_and_timeout_report_status_zero() {
    let net = ApiError::network(Some("req-1".into()));
    assert_eq!(net.status, 0);
    assert_eq!(net.message, NETWORK_ERROR_MESSAGE);
    assert_eq!(net.request_id.as_deref(), Some("req-1"));

    let timeout = ApiError::timeout(None);
    assert_eq!(timeout.status, 0);
    assert_eq!(timeout.message, TIMEOUT_ERROR_MESSAGE);
}

#[test]
fn message_precedence_body_then_table_then_fallback() {
    let from_body = ApiError::from_status(404, Some("No such edge".into()), None);
    assert_eq!(from_body.message, "No such edge");

    let from_table = ApiError::from_status(404, None, None);
    assert_eq!(from_table.message, "The requested resource was not found.");

    let fallback = ApiError::from_status(418, None, None);
    assert_eq!(fallback.message, FALLBACK_ERROR_MESSAGE);
}

#[test]
fn only_network_and_server_errors_are_retryable() {
    assert!(ApiError::network(None).is_retryable());
    assert!(ApiError::from_status(500, None, None).is_retryable());
    assert!(ApiError::from_status(503, None, None).is_retryable());

    assert!(!ApiError::from_status(400, None, None).is_retryable());
    assert!(!ApiError::from_status(401, None, None).is_retryable());
    assert!(!ApiError::from_status(404, None, None).is_retryable());
    assert!(!ApiError::from_status(429, None, None).is_retryable());
}

#[test]
fn unauthorized_is_only_401() {
    assert!(ApiError::from_status(401, None, None).is_unauthorized());
    assert!(!ApiError::from_status(403, None, None).is_unauthorized());
    assert!(!ApiError::network(None).is_unauthorized());
}

#[test]
fn body_message_field_beats_error_field() {
    assert_eq!(
        extract_body_message(r#"{"message":"Quota exceeded","error":"ignored"}"#),
        Some("Quota exceeded".into())
    );
    assert_eq!(
        extract_body_message(r#"{"error":"Unknown account"}"#),
        Some("Unknown account".into())
    );
    assert_eq!(extract_body_message("<html>bad gateway</html>"), None);
    assert_eq!(extract_body_message(r#"{"message":""}"#), None);
}

#[test]
fn display_renders_the_user_message() {
    let err = ApiError::from_status(503, None, Some("req-7".into()));
    assert_eq!(
        err.to_string(),
        "The service is temporarily unavailable. Please try again shortly."
    );
}
