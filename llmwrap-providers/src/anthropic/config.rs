//! Anthropic provider configuration

use crate::constants::{ANTHROPIC_DEFAULT_BASE_URL, ANTHROPIC_DEFAULT_VERSION, DEFAULT_TIMEOUT};
use crate::http::join_url;
use crate::utils::{env_var, parse_base_url, require_api_key};
use llmwrap_core::Error;
use std::time::Duration;

/// Configuration for the Anthropic provider
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the Anthropic API
    pub base_url: String,
    /// Value of the `anthropic-version` header
    pub version: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: env_var("ANTHROPIC_API_KEY").unwrap_or_default(),
            base_url: env_var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| ANTHROPIC_DEFAULT_BASE_URL.to_string()),
            version: ANTHROPIC_DEFAULT_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AnthropicConfig {
    /// Create a new configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version header
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the URL for the messages endpoint
    pub fn messages_url(&self) -> String {
        join_url(&self.base_url, "v1/messages")
    }

    /// Check the key and base URL
    pub fn validate(&self) -> Result<(), Error> {
        require_api_key(&self.api_key, "ANTHROPIC_API_KEY")?;
        parse_base_url(&self.base_url, "Anthropic base URL")?;
        Ok(())
    }
}
