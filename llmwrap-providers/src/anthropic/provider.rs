//! Anthropic provider implementation
//!
//! Sends merged parameters to the messages API, after the renames described
//! on [`MessagesConverter`].

use crate::anthropic::{config::AnthropicConfig, converter::MessagesConverter};
use crate::completion::{ApiShape, Completion};
use crate::http::{header_value, json_headers, post_json, HttpClient, ReqwestClient};
use crate::traits::RequestConverter;
use async_trait::async_trait;
use llmwrap_core::{CompletionProvider, Error, FromConfig, MessagesApi, Parameters};
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;

/// Anthropic Claude provider for the messages API
///
/// # Example
///
/// ```no_run
/// use llmwrap_providers::Anthropic;
/// use llmwrap_providers::anthropic::AnthropicConfig;
/// use llmwrap_providers::http::ReqwestClient;
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), llmwrap_core::Error> {
/// let provider = Anthropic::with_api_key("your-api-key")?;
///
/// let config = AnthropicConfig::new("your-api-key").with_base_url("https://gateway.example.com");
/// let provider = Anthropic::new(config, Arc::new(ReqwestClient::new()?))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Anthropic {
    config: AnthropicConfig,
    client: Arc<dyn HttpClient>,
    converter: MessagesConverter,
}

impl Anthropic {
    /// Create a new Anthropic provider with the given configuration and client
    pub fn new(config: AnthropicConfig, client: Arc<dyn HttpClient>) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            client,
            converter: MessagesConverter,
        })
    }

    /// Create a new Anthropic provider with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(AnthropicConfig::new(api_key))
    }

    /// The provider configuration
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = json_headers();
        headers.insert("x-api-key", header_value(&self.config.api_key, "API key")?);
        headers.insert(
            "anthropic-version",
            header_value(&self.config.version, "API version")?,
        );
        Ok(headers)
    }
}

impl fmt::Debug for Anthropic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anthropic")
            .field("base_url", &self.config.base_url)
            .field("version", &self.config.version)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for Anthropic {
    type Response = Completion;
    type Error = Error;

    fn name(&self) -> &str {
        "anthropic"
    }

    async fn create(&self, params: Parameters) -> Result<Completion, Error> {
        let body = self.converter.convert_request(params)?.into_value();
        let headers = self.headers()?;

        let raw = post_json(
            self.client.as_ref(),
            self.name(),
            &self.config.messages_url(),
            headers,
            body,
        )
        .await?;

        Ok(Completion::new(ApiShape::Messages, raw))
    }
}

impl FromConfig for Anthropic {
    type Config = AnthropicConfig;

    fn from_config(config: AnthropicConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::with_timeout(config.timeout)?);
        Self::new(config, client)
    }
}

impl MessagesApi for Anthropic {}
