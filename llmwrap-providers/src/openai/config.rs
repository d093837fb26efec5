//! OpenAI provider configuration

use crate::constants::{DEFAULT_TIMEOUT, OPENAI_DEFAULT_BASE_URL};
use crate::http::join_url;
use crate::utils::{env_var, parse_base_url, require_api_key};
use llmwrap_core::Error;
use std::time::Duration;

/// Configuration for the OpenAI provider
///
/// `Default` reads `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_ORG_ID`.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Optional organization ID
    pub organization_id: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: env_var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: env_var("OPENAI_BASE_URL").unwrap_or_else(|| OPENAI_DEFAULT_BASE_URL.to_string()),
            organization_id: env_var("OPENAI_ORG_ID"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OpenAIConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the organization ID
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization_id = Some(org.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the URL for chat completions
    pub fn chat_url(&self) -> String {
        join_url(&self.base_url, "chat/completions")
    }

    /// Check the key and base URL
    pub fn validate(&self) -> Result<(), Error> {
        require_api_key(&self.api_key, "OPENAI_API_KEY")?;
        parse_base_url(&self.base_url, "OpenAI base URL")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url() {
        let config = OpenAIConfig::new("sk-test").with_base_url("https://proxy.example.com/v1/");
        assert_eq!(config.chat_url(), "https://proxy.example.com/v1/chat/completions");
    }

    #[test]
    fn test_validate() {
        let config = OpenAIConfig::new("sk-test").with_base_url("https://api.openai.com/v1");
        assert!(config.validate().is_ok());

        let config = OpenAIConfig::new("").with_base_url("https://api.openai.com/v1");
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let config = OpenAIConfig::new("sk-test").with_base_url("api.openai.com");
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }
}
