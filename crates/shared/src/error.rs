//! Client-side API error type.

use serde::Deserialize;
use thiserror::Error;

/// What went wrong with an API request, from the caller's point of view.
///
/// There is no finer taxonomy: views only distinguish "could not reach the
/// backend", "the backend said no" (with the status for the 401 special
/// case), and "the response didn't look like what we expected".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

/// Error envelope the backend emits on non-2xx responses.
///
/// `message` is a string for most errors, but validation failures carry an
/// array of strings.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull a human-readable message out of an error response body.
///
/// Returns `None` when the body isn't the backend's JSON error envelope, in
/// which case callers fall back to the raw body.
pub fn try_error_message(body: &str) -> Option<String> {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok()?;

    match envelope.message {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => return Some(s),
        Some(serde_json::Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        _ => {}
    }

    envelope.error.filter(|e| !e.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_string_message() {
        let body = r#"{"statusCode":401,"message":"Invalid credentials","error":"Unauthorized"}"#;
        assert_eq!(try_error_message(body).as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn joins_validation_messages() {
        let body = r#"{"statusCode":400,"message":["email must be an email","password is too short"],"error":"Bad Request"}"#;
        assert_eq!(
            try_error_message(body).as_deref(),
            Some("email must be an email; password is too short")
        );
    }

    #[test]
    fn falls_back_to_error_field_then_none() {
        let body = r#"{"statusCode":500,"error":"Internal Server Error"}"#;
        assert_eq!(try_error_message(body).as_deref(), Some("Internal Server Error"));

        assert_eq!(try_error_message("<html>nope</html>"), None);
    }
}
