//! Azure OpenAI provider configuration

use crate::constants::{AZURE_DEFAULT_API_VERSION, DEFAULT_TIMEOUT};
use crate::utils::{env_var, parse_base_url, require_api_key};
use llmwrap_core::Error;
use std::time::Duration;

/// Configuration for the Azure OpenAI provider
///
/// `Default` reads `AZURE_OPENAI_API_KEY`, `AZURE_OPENAI_ENDPOINT` and
/// `OPENAI_API_VERSION`. Without a `deployment`, the `model` parameter of each
/// call names the deployment.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    /// API key sent in the `api-key` header
    pub api_key: String,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// REST API version query parameter
    pub api_version: String,
    /// Fixed deployment name
    pub deployment: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            api_key: env_var("AZURE_OPENAI_API_KEY").unwrap_or_default(),
            endpoint: env_var("AZURE_OPENAI_ENDPOINT").unwrap_or_default(),
            api_version: env_var("OPENAI_API_VERSION")
                .unwrap_or_else(|| AZURE_DEFAULT_API_VERSION.to_string()),
            deployment: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AzureConfig {
    /// Create a new configuration for an endpoint
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Pin every call to one deployment
    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = Some(deployment.into());
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the chat completions endpoint of `deployment`
    pub fn chat_url(&self, deployment: &str) -> Result<String, Error> {
        let mut url = parse_base_url(&self.endpoint, "Azure endpoint")?;

        url.path_segments_mut()
            .map_err(|()| Error::Configuration(format!("Invalid Azure endpoint '{}'", self.endpoint)))?
            .pop_if_empty()
            .extend(["openai", "deployments", deployment, "chat", "completions"]);
        url.query_pairs_mut().append_pair("api-version", &self.api_version);

        Ok(url.into())
    }

    /// Check the key and endpoint
    pub fn validate(&self) -> Result<(), Error> {
        require_api_key(&self.api_key, "AZURE_OPENAI_API_KEY")?;
        if self.endpoint.trim().is_empty() {
            return Err(Error::Configuration(
                "Azure endpoint is required; pass one explicitly or set AZURE_OPENAI_ENDPOINT"
                    .to_string(),
            ));
        }
        parse_base_url(&self.endpoint, "Azure endpoint")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url() {
        let config = AzureConfig::new("key", "https://my-resource.openai.azure.com/")
            .with_api_version("2024-10-21");
        assert_eq!(
            config.chat_url("gpt-4o-prod").unwrap(),
            "https://my-resource.openai.azure.com/openai/deployments/gpt-4o-prod/chat/completions?api-version=2024-10-21"
        );
    }

    #[test]
    fn test_deployment_is_escaped() {
        let config = AzureConfig::new("key", "https://r.openai.azure.com").with_api_version("v");
        let url = config.chat_url("a/b").unwrap();
        assert!(url.contains("/deployments/a%2Fb/chat/completions"));
    }

    #[test]
    fn test_endpoint_required() {
        let err = AzureConfig::new("key", "").validate().unwrap_err();
        assert!(err.to_string().contains("AZURE_OPENAI_ENDPOINT"));
    }
}
