//! Error types for Fintrack.
//!
//! Every failed HTTP exchange is reported as a single [`RequestError`], whether
//! the transport failed, the request timed out, or the backend answered with a
//! non-2xx status. The same value that the response interceptor observes is
//! handed back to the caller.

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the Fintrack client.
#[derive(Debug, Error)]
pub enum FintrackError {
    /// A failed HTTP exchange with the backend.
    #[error(transparent)]
    Request(#[from] RequestError),

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for Fintrack operations.
pub type Result<T> = std::result::Result<T, FintrackError>;

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        FintrackError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl FintrackError {
    /// The underlying request failure, if this error came from the backend.
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            FintrackError::Request(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status returned by the backend, if a response was received.
    pub fn status(&self) -> Option<u16> {
        self.as_request().and_then(|err| err.status)
    }
}

/// A failed HTTP exchange, exactly as the transport reported it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{method} {url}: {message}")]
pub struct RequestError {
    /// HTTP method of the failed request.
    pub method: Method,
    /// Fully resolved request URL.
    pub url: String,
    /// Response status, absent when no response arrived.
    pub status: Option<u16>,
    /// Response body, parsed as JSON when possible and otherwise kept as a
    /// JSON string. Absent when no response arrived or the body was empty.
    pub payload: Option<Value>,
    /// Human-readable failure description.
    pub message: String,
    /// Whether the request exceeded the client timeout.
    pub timed_out: bool,
}

impl RequestError {
    /// Build an error for a response with a non-success status.
    pub(crate) fn from_status(method: Method, url: String, status: u16, body: &str) -> Self {
        Self {
            method,
            url,
            status: Some(status),
            payload: parse_payload(body),
            message: format!("Request failed with status code {}", status),
            timed_out: false,
        }
    }

    /// Build an error for a request that never produced a usable response.
    pub(crate) fn from_transport(method: Method, url: String, err: &reqwest::Error) -> Self {
        Self {
            method,
            url,
            status: err.status().map(|s| s.as_u16()),
            payload: None,
            message: error_chain(err),
            timed_out: err.is_timeout(),
        }
    }

    /// What gets reported to the operator: the response payload when one was
    /// received, otherwise the error message.
    pub fn diagnostic(&self) -> String {
        match &self.payload {
            Some(Value::String(text)) => text.clone(),
            Some(payload) => payload.to_string(),
            None => self.message.clone(),
        }
    }
}

/// Parse a response body. Non-JSON text is preserved as a JSON string.
pub(crate) fn parse_payload(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}

/// Join an error with its sources, reqwest hides the useful part in the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_error_keeps_json_payload() {
        let err = RequestError::from_status(
            Method::POST,
            "http://localhost:8000/api/debts".to_string(),
            422,
            r#"{"message":"amount is required"}"#,
        );
        assert_eq!(err.status, Some(422));
        assert_eq!(err.payload, Some(json!({"message": "amount is required"})));
        assert_eq!(err.diagnostic(), r#"{"message":"amount is required"}"#);
        assert!(!err.timed_out);
    }

    #[test]
    fn test_status_error_keeps_text_payload() {
        let err = RequestError::from_status(
            Method::GET,
            "http://localhost:8000/api/debts/top".to_string(),
            502,
            "Bad Gateway\n",
        );
        assert_eq!(err.payload, Some(Value::String("Bad Gateway".to_string())));
        assert_eq!(err.diagnostic(), "Bad Gateway");
    }

    #[test]
    fn test_empty_body_falls_back_to_message() {
        let err = RequestError::from_status(
            Method::DELETE,
            "http://localhost:8000/api/categories/4".to_string(),
            500,
            "   ",
        );
        assert_eq!(err.payload, None);
        assert_eq!(err.diagnostic(), "Request failed with status code 500");
    }

    #[test]
    fn test_display_names_request() {
        let err = RequestError::from_status(
            Method::GET,
            "http://localhost:8000/api/wishlist".to_string(),
            404,
            "",
        );
        assert_eq!(
            err.to_string(),
            "GET http://localhost:8000/api/wishlist: Request failed with status code 404"
        );
    }

    #[test]
    fn test_fintrack_error_status_passthrough() {
        let err: FintrackError = RequestError::from_status(
            Method::GET,
            "http://localhost:8000/api/debts".to_string(),
            503,
            "",
        )
        .into();
        assert_eq!(err.status(), Some(503));
        assert!(err.as_request().is_some());

        let config = FintrackError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(config.status(), None);
        assert!(config.as_request().is_none());
    }
}
