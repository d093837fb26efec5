//! Common utilities for provider configuration

use llmwrap_core::Error;
use url::Url;

/// Read an environment variable, treating empty values as unset
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parse a base URL, accepting only http and https
pub fn parse_base_url(url: &str, what: &str) -> Result<Url, Error> {
    let parsed = Url::parse(url).map_err(|e| Error::Configuration(format!("Invalid {what} '{url}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::Configuration(format!(
            "Invalid {what} '{url}': unsupported scheme '{scheme}'"
        ))),
    }
}

/// Reject an empty API key
pub fn require_api_key(api_key: &str, env_hint: &str) -> Result<(), Error> {
    if api_key.trim().is_empty() {
        Err(Error::Configuration(format!(
            "API key is required; pass one explicitly or set {env_hint}"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("https://api.openai.com/v1", "base URL").is_ok());
        assert!(parse_base_url("http://localhost:8000/v1", "base URL").is_ok());

        let err = parse_base_url("not a url", "base URL").unwrap_err();
        assert!(err.to_string().contains("Invalid base URL 'not a url'"));

        let err = parse_base_url("ftp://example.com", "endpoint").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_require_api_key() {
        assert!(require_api_key("sk-test", "OPENAI_API_KEY").is_ok());
        let err = require_api_key("  ", "OPENAI_API_KEY").unwrap_err();
        assert!(matches!(err, Error::Configuration(ref m) if m.contains("OPENAI_API_KEY")));
    }
}
