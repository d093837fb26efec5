//! OpenAI-compatible provider implementation

use crate::compatible::CompatibleConfig;
use crate::completion::{ApiShape, Completion};
use crate::http::{bearer_headers, post_json, HttpClient, ReqwestClient};
use crate::openai::ChatCompletionsConverter;
use crate::traits::RequestConverter;
use async_trait::async_trait;
use llmwrap_core::{ChatCompletionsApi, CompletionProvider, Error, FromConfig, Parameters};
use std::fmt;
use std::sync::Arc;

/// Client for any server exposing `{base_url}/chat/completions`
///
/// Parameters are sent exactly as merged; no names are translated.
#[derive(Clone)]
pub struct OpenAICompatible {
    client: Arc<dyn HttpClient>,
    config: CompatibleConfig,
    converter: ChatCompletionsConverter,
}

impl OpenAICompatible {
    /// Create a new provider with the given configuration and client
    pub fn new(config: CompatibleConfig, client: Arc<dyn HttpClient>) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            client,
            config,
            converter: ChatCompletionsConverter::passthrough(),
        })
    }

    /// The provider configuration
    pub fn config(&self) -> &CompatibleConfig {
        &self.config
    }
}

impl fmt::Debug for OpenAICompatible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAICompatible")
            .field("name", &self.config.name)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompatible {
    type Response = Completion;
    type Error = Error;

    fn name(&self) -> &str {
        &self.config.name
    }

    async fn create(&self, params: Parameters) -> Result<Completion, Error> {
        let body = self.converter.convert_request(params)?.into_value();
        let headers = bearer_headers(self.config.api_key.as_deref())?;

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

impl FromConfig for OpenAICompatible {
    type Config = CompatibleConfig;

    fn from_config(config: CompatibleConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::with_timeout(config.timeout)?);
        Self::new(config, client)
    }
}

impl ChatCompletionsApi for OpenAICompatible {}
