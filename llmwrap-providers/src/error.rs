//! Conversions from transport failures and error responses to core errors

use crate::http::HttpResponse;
use llmwrap_core::Error;
use serde_json::Value;

/// Convert network errors to core errors
pub fn network_error(error: reqwest::Error) -> Error {
    Error::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert serialization errors to core errors
pub fn serialization_error(error: serde_json::Error) -> Error {
    Error::Serialization {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert a non-success HTTP response to a core error
///
/// 401 and 403 become [`Error::Authentication`]; every other status becomes
/// [`Error::Provider`] carrying the status and any `Retry-After` hint.
pub fn status_error(provider: &str, response: &HttpResponse) -> Error {
    let message = error_message(response);
    match response.status {
        401 | 403 => Error::Authentication(format!(
            "{provider} rejected the credentials (HTTP {}): {message}",
            response.status
        )),
        status => Error::Provider {
            provider: provider.to_string(),
            status: Some(status),
            message: format!("HTTP {status}: {message}"),
            retry_after: response.retry_after,
        },
    }
}

// Both OpenAI and Anthropic wrap failures as {"error": {"message": ...}}
fn error_message(response: &HttpResponse) -> String {
    let from_json = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    match from_json {
        Some(message) => message,
        None if response.body.trim().is_empty() => "empty response body".to_string(),
        None => response.body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn response(status: u16, body: &str, retry_after: Option<Duration>) -> HttpResponse {
        HttpResponse {
            status,
            retry_after,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_auth_statuses() {
        let err = status_error(
            "openai",
            &response(401, r#"{"error": {"message": "Incorrect API key provided"}}"#, None),
        );
        assert_eq!(
            err.to_string(),
            "Authentication error: openai rejected the credentials (HTTP 401): Incorrect API key provided"
        );

        let err = status_error("anthropic", &response(403, "", None));
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_rate_limit_keeps_retry_after() {
        let err = status_error(
            "anthropic",
            &response(
                429,
                r#"{"type": "error", "error": {"type": "rate_limit_error", "message": "Too many requests"}}"#,
                Some(Duration::from_secs(12)),
            ),
        );

        assert_eq!(err.status(), Some(429));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(12)));
        assert_eq!(err.to_string(), "Provider error (anthropic): HTTP 429: Too many requests");
    }

    #[test]
    fn test_plain_text_body() {
        let err = status_error("vllm", &response(502, "bad gateway\n", None));
        assert_eq!(err.to_string(), "Provider error (vllm): HTTP 502: bad gateway");
    }
}
