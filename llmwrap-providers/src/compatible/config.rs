//! Configuration for OpenAI-compatible servers

use crate::constants::{COMPATIBLE_DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::http::join_url;
use crate::utils::parse_base_url;
use llmwrap_core::Error;
use std::time::Duration;

/// Configuration for a server speaking the chat completions protocol
/// (vLLM, LM Studio, llama.cpp server, gateways, ...)
#[derive(Debug, Clone)]
pub struct CompatibleConfig {
    /// Name reported in logs and errors
    pub name: String,
    /// Base URL, up to and including the version segment
    pub base_url: String,
    /// Optional bearer token
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CompatibleConfig {
    fn default() -> Self {
        Self {
            name: "openai-compatible".to_string(),
            base_url: COMPATIBLE_DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CompatibleConfig {
    /// Create a configuration for a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the name used in logs and errors
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the bearer token
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
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

    /// Check the base URL
    pub fn validate(&self) -> Result<(), Error> {
        parse_base_url(&self.base_url, "base URL")?;
        Ok(())
    }
}
