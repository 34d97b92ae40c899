use serde::Serialize;
use thiserror::Error;

/// Fixed message for network-level failures (no response received).
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect. Please check your internet connection and try again.";

/// Fixed message for requests that hit the client timeout.
pub const TIMEOUT_ERROR_MESSAGE: &str = "The request timed out. Please try again.";

/// Fallback when nothing more specific applies.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Normalized API failure. Every error leaving the access layer is one of
/// these; raw transport errors never cross this boundary.
///
/// `status` is the HTTP status code, or 0 for network-level failures.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16, request_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            status,
            request_id,
        }
    }

    /// Connection-level failure: no response object exists.
    pub fn network(request_id: Option<String>) -> Self {
        Self::new(NETWORK_ERROR_MESSAGE, 0, request_id)
    }

    /// Request exceeded the client timeout.
    pub fn timeout(request_id: Option<String>) -> Self {
        Self::new(TIMEOUT_ERROR_MESSAGE, 0, request_id)
    }

    /// Local (non-HTTP) failure, e.g. the client-side store.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, 0, None)
    }

    /// Normalize a non-success HTTP status into an error, applying the
    /// message precedence: structured body message, then the fixed status
    /// table, then the generic fallback.
    pub fn from_status(status: u16, body_message: Option<String>, request_id: Option<String>) -> Self {
        let message = body_message
            .or_else(|| status_message(status).map(String::from))
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Self::new(message, status, request_id)
    }

    /// Only network failures and 5xx-class responses are worth retrying.
    /// A 4xx cannot succeed on repeat and may duplicate side effects.
    pub fn is_retryable(&self) -> bool {
        self.status == 0 || self.status >= 500
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Fixed friendly strings for well-known status codes.
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("Invalid request. Please check your input and try again."),
        401 => Some("Your session has expired. Please sign in again."),
        403 => Some("You don't have access to this resource."),
        404 => Some("The requested resource was not found."),
        413 => Some("That file is too large to upload."),
        429 => Some("Too many requests. Please wait a moment and try again."),
        500 => Some("The server hit an unexpected error. Please try again."),
        503 => Some("The service is temporarily unavailable. Please try again shortly."),
        _ => None,
    }
}

/// Pull a structured error message out of a response body, checking the
/// `message` field first and `error` second.
pub fn extract_body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "error"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            if !msg.trim().is_empty() {
                return Some(msg.to_string());
            }
        }
    }
    None
}
