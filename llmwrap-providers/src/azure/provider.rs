//! Azure OpenAI provider implementation

use crate::azure::AzureConfig;
use crate::completion::{ApiShape, Completion};
use crate::http::{header_value, json_headers, post_json, HttpClient, ReqwestClient};
use crate::openai::ChatCompletionsConverter;
use crate::traits::RequestConverter;
use async_trait::async_trait;
use llmwrap_core::{ChatCompletionsApi, CompletionProvider, Error, FromConfig, Parameters};
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;

/// Azure OpenAI provider for chat completions
///
/// Azure routes by deployment rather than by model: the deployment comes from
/// the configuration, or else from the call's `model` parameter. `model` is
/// never sent in the body.
#[derive(Clone)]
pub struct AzureOpenAI {
    client: Arc<dyn HttpClient>,
    config: AzureConfig,
    converter: ChatCompletionsConverter,
}

impl AzureOpenAI {
    /// Create a new Azure OpenAI provider with the given configuration and client
    pub fn new(config: AzureConfig, client: Arc<dyn HttpClient>) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            client,
            config,
            converter: ChatCompletionsConverter::openai(),
        })
    }

    /// The provider configuration
    pub fn config(&self) -> &AzureConfig {
        &self.config
    }

    fn resolve_deployment(&self, params: &mut Parameters) -> Result<String, Error> {
        let model = params.remove("model");

        if let Some(deployment) = &self.config.deployment {
            return Ok(deployment.clone());
        }

        match model {
            Some(serde_json::Value::String(model)) if !model.is_empty() => Ok(model),
            _ => Err(Error::Configuration(
                "No Azure deployment: configure one or pass `model` with the deployment name"
                    .to_string(),
            )),
        }
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = json_headers();
        headers.insert("api-key", header_value(&self.config.api_key, "API key")?);
        Ok(headers)
    }
}

impl fmt::Debug for AzureOpenAI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureOpenAI")
            .field("endpoint", &self.config.endpoint)
            .field("api_version", &self.config.api_version)
            .field("deployment", &self.config.deployment)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionProvider for AzureOpenAI {
    type Response = Completion;
    type Error = Error;

    fn name(&self) -> &str {
        "azure"
    }

    async fn create(&self, mut params: Parameters) -> Result<Completion, Error> {
        let deployment = self.resolve_deployment(&mut params)?;
        let url = self.config.chat_url(&deployment)?;
        let body = self.converter.convert_request(params)?.into_value();

        let raw = post_json(self.client.as_ref(), self.name(), &url, self.headers()?, body).await?;

        Ok(Completion::new(ApiShape::ChatCompletions, raw))
    }
}

impl FromConfig for AzureOpenAI {
    type Config = AzureConfig;

    fn from_config(config: AzureConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::with_timeout(config.timeout)?);
        Self::new(config, client)
    }
}

impl ChatCompletionsApi for AzureOpenAI {}
