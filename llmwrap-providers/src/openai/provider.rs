//! OpenAI provider implementation
//!
//! Sends merged parameters to OpenAI's chat completions endpoint. The only
//! translation is the `max_tokens` → `max_completion_tokens` rename; every
//! other parameter goes into the request body as given.

use crate::completion::{ApiShape, Completion};
use crate::http::{bearer_headers, header_value, post_json, HttpClient, ReqwestClient};
use crate::openai::{config::OpenAIConfig, converter::ChatCompletionsConverter};
use crate::traits::RequestConverter;
use async_trait::async_trait;
use llmwrap_core::{ChatCompletionsApi, CompletionProvider, Error, FromConfig, Parameters};
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;

/// OpenAI provider for chat completions
///
/// # Example
///
/// ```no_run
/// use llmwrap_providers::OpenAI;
/// use llmwrap_providers::openai::OpenAIConfig;
/// use llmwrap_providers::http::ReqwestClient;
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), llmwrap_core::Error> {
/// // Create with API key
/// let provider = OpenAI::with_api_key("your-api-key")?;
///
/// // Or with custom configuration and client
/// let config = OpenAIConfig::new("your-api-key").with_organization("org-id");
/// let client = Arc::new(ReqwestClient::new()?);
/// let provider = OpenAI::new(config, client)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    converter: ChatCompletionsConverter,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given configuration and client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            client,
            config,
            converter: ChatCompletionsConverter::openai(),
        })
    }

    /// Create a new OpenAI provider with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(OpenAIConfig::new(api_key))
    }

    /// The provider configuration
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = bearer_headers(Some(&self.config.api_key))?;
        if let Some(org) = &self.config.organization_id {
            headers.insert("openai-organization", header_value(org, "organization ID")?);
        }
        Ok(headers)
    }
}

impl fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAI")
            .field("base_url", &self.config.base_url)
            .field("organization_id", &self.config.organization_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for OpenAI {
    type Response = Completion;
    type Error = Error;

    fn name(&self) -> &str {
        "openai"
    }

    async fn create(&self, params: Parameters) -> Result<Completion, Error> {
        let body = self.converter.convert_request(params)?.into_value();
        let headers = self.headers()?;

        let raw = post_json(
            self.client.as_ref(),
            self.name(),
            &self.config.chat_url(),
            headers,
            body,
        )
        .await?;

        Ok(Completion::new(ApiShape::ChatCompletions, raw))
    }
}

impl FromConfig for OpenAI {
    type Config = OpenAIConfig;

    fn from_config(config: OpenAIConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::with_timeout(config.timeout)?);
        Self::new(config, client)
    }
}

impl ChatCompletionsApi for OpenAI {}
