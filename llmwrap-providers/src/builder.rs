//! Builder pattern for provider construction
//!
//! Builders are the fluent alternative to filling a config struct by hand.
//! All configuration methods return `self`, and `build()` is the terminal
//! method that validates the configuration and constructs the provider.
//!
//! # Examples
//!
//! ```no_run
//! use llmwrap_providers::builder::{OpenAIBuilder, ProviderBuilder};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), llmwrap_core::Error> {
//! // Basic usage
//! let provider = OpenAIBuilder::new("api-key").build()?;
//!
//! // With all options
//! # let custom_client = Arc::new(llmwrap_providers::http::ReqwestClient::new()?);
//! let provider = OpenAIBuilder::new("api-key")
//!     .base_url("https://proxy.example.com/v1")
//!     .organization("org-123")
//!     .with_client(custom_client)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::anthropic::AnthropicConfig;
use crate::azure::AzureConfig;
use crate::compatible::CompatibleConfig;
use crate::http::{HttpClient, ReqwestClient};
use crate::openai::OpenAIConfig;
use crate::{Anthropic, AzureOpenAI, OpenAI, OpenAICompatible};
use llmwrap_core::Error;
use std::sync::Arc;
use std::time::Duration;

/// Common builder trait for all providers
pub trait ProviderBuilder: Sized {
    /// The provider type being built
    type Provider;

    /// Set a custom HTTP client
    ///
    /// Useful for testing or special networking requirements (proxies,
    /// custom TLS).
    fn with_client(self, client: Arc<dyn HttpClient>) -> Self;

    /// Build the provider
    fn build(self) -> Result<Self::Provider, Error>;
}

fn client_or_default(
    client: Option<Arc<dyn HttpClient>>,
    timeout: Duration,
) -> Result<Arc<dyn HttpClient>, Error> {
    match client {
        Some(client) => Ok(client),
        None => Ok(Arc::new(ReqwestClient::with_timeout(timeout)?)),
    }
}

/// Builder for constructing OpenAI providers
pub struct OpenAIBuilder {
    config: OpenAIConfig,
    client: Option<Arc<dyn HttpClient>>,
}

impl OpenAIBuilder {
    /// Create a new OpenAI builder with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: OpenAIConfig::new(api_key),
            client: None,
        }
    }

    /// Set the base URL (proxies, gateways)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the organization ID
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.config.organization_id = Some(org.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }
}

impl ProviderBuilder for OpenAIBuilder {
    type Provider = OpenAI;

    fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    fn build(self) -> Result<OpenAI, Error> {
        let client = client_or_default(self.client, self.config.timeout)?;
        OpenAI::new(self.config, client)
    }
}

/// Builder for constructing Azure OpenAI providers
///
/// # Example
///
/// ```no_run
/// use llmwrap_providers::builder::{AzureBuilder, ProviderBuilder};
///
/// let provider = AzureBuilder::new("key", "https://my-resource.openai.azure.com")
///     .deployment("gpt-4o-prod")
///     .api_version("2024-10-21")
///     .build()
///     .expect("Failed to build Azure provider");
/// ```
pub struct AzureBuilder {
    config: AzureConfig,
    client: Option<Arc<dyn HttpClient>>,
}

impl AzureBuilder {
    /// Create a new Azure builder for an endpoint
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            config: AzureConfig::new(api_key, endpoint),
            client: None,
        }
    }

    /// Pin every call to one deployment
    pub fn deployment(mut self, deployment: impl Into<String>) -> Self {
        self.config.deployment = Some(deployment.into());
        self
    }

    /// Set the API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }
}

impl ProviderBuilder for AzureBuilder {
    type Provider = AzureOpenAI;

    fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    fn build(self) -> Result<AzureOpenAI, Error> {
        let client = client_or_default(self.client, self.config.timeout)?;
        AzureOpenAI::new(self.config, client)
    }
}

/// Builder for constructing Anthropic providers
pub struct AnthropicBuilder {
    config: AnthropicConfig,
    client: Option<Arc<dyn HttpClient>>,
}

impl AnthropicBuilder {
    /// Create a new Anthropic builder with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: AnthropicConfig::new(api_key),
            client: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }
}

impl ProviderBuilder for AnthropicBuilder {
    type Provider = Anthropic;

    fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    fn build(self) -> Result<Anthropic, Error> {
        let client = client_or_default(self.client, self.config.timeout)?;
        Anthropic::new(self.config, client)
    }
}

/// Builder for OpenAI-compatible servers
///
/// No API key is needed for local servers.
///
/// ```no_run
/// use llmwrap_providers::builder::{CompatibleBuilder, ProviderBuilder};
///
/// let provider = CompatibleBuilder::new("http://localhost:1234/v1")
///     .name("lm-studio")
///     .build()
///     .expect("Failed to build provider");
/// ```
#[derive(Default)]
pub struct CompatibleBuilder {
    config: CompatibleConfig,
    client: Option<Arc<dyn HttpClient>>,
}

impl CompatibleBuilder {
    /// Create a new builder for a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: CompatibleConfig::new(base_url),
            client: None,
        }
    }

    /// Set the name used in logs and errors
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the bearer token
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }
}

impl ProviderBuilder for CompatibleBuilder {
    type Provider = OpenAICompatible;

    fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    fn build(self) -> Result<OpenAICompatible, Error> {
        let client = client_or_default(self.client, self.config.timeout)?;
        OpenAICompatible::new(self.config, client)
    }
}
