//! MBTA client error types.

use super::convert::ConversionError;

/// Errors from fetching catalog or prediction data.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// API key rejected
    #[error("unauthorized: check MBTA_API_KEY")]
    Unauthorized,

    /// API key cannot be sent as a header value
    #[error("invalid API key: must be printable ASCII")]
    InvalidApiKey,

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response decoded but could not be converted to domain values
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Mock fixture could not be read
    #[error("fixture {path}: {message}")]
    Fixture { path: String, message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

impl MbtaError {
    /// Wrap a serde_json error, keeping the head of the offending body.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        MbtaError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MbtaError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by MBTA API");

        let err = MbtaError::InvalidApiKey;
        assert_eq!(err.to_string(), "invalid API key: must be printable ASCII");

        let err = MbtaError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = MbtaError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value (body: <html>)");

        let err = MbtaError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }

    #[test]
    fn json_helper_truncates_body() {
        let body = "x".repeat(2000);
        let source = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        match MbtaError::json(source, &body) {
            MbtaError::Json { body: Some(b), .. } => assert_eq!(b.len(), 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
