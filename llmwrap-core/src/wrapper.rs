//! The parameter-merging wrapper
//!
//! A [`Wrapper`] holds a provider client and a set of default parameters. Each
//! call overlays the caller's parameters on the defaults and forwards the
//! result to the client once; the client's response or error comes back
//! exactly as the client produced it.
//!
//! # Example
//!
//! ```no_run
//! # async fn example<P>(client: P) -> Result<(), P::Error>
//! # where P: llmwrap_core::CompletionProvider + llmwrap_core::ChatCompletionsApi {
//! use llmwrap_core::{Message, Parameters, Wrapper};
//!
//! let defaults = Parameters::builder().model("gpt-4o").max_tokens(1000).build();
//! let wrapper = Wrapper::from_instance(client, defaults);
//!
//! let overrides = Parameters::builder()
//!     .messages([Message::user("hi")])
//!     .temperature(0.5)
//!     .build();
//! let response = wrapper.chat().completions().create(overrides).await?;
//! # let _ = response;
//! # Ok(())
//! # }
//! ```

use crate::params::Parameters;
use crate::provider::{ChatCompletionsApi, CompletionProvider, FromConfig, MessagesApi};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Wraps a provider client with default completion parameters
#[derive(Debug, Clone)]
pub struct Wrapper<P> {
    client: P,
    defaults: Parameters,
}

impl<P: CompletionProvider> Wrapper<P> {
    /// Wrap an already constructed client
    pub fn from_instance(client: P, defaults: impl Into<Parameters>) -> Self {
        Self {
            client,
            defaults: defaults.into(),
        }
    }

    /// Construct the client once from its configuration, then wrap it
    pub fn from_config(config: P::Config, defaults: impl Into<Parameters>) -> Result<Self, P::Error>
    where
        P: FromConfig,
    {
        let client = P::from_config(config)?;
        debug!(provider = client.name(), "Constructed wrapped client");
        Ok(Self::from_instance(client, defaults))
    }

    /// Construct the client from its default (environment derived) configuration
    pub fn from_env(defaults: impl Into<Parameters>) -> Result<Self, P::Error>
    where
        P: FromConfig,
        P::Config: Default,
    {
        Self::from_config(P::Config::default(), defaults)
    }

    /// Merge `overrides` into the defaults and forward them to the client
    ///
    /// Keys present in `overrides` win; every other default is kept. The
    /// merge is shallow. Errors from the client are returned unchanged.
    pub async fn create(&self, overrides: impl Into<Parameters>) -> Result<P::Response, P::Error> {
        let overrides = overrides.into();
        let params = self.defaults.merged_with(&overrides);

        debug!(
            provider = self.client.name(),
            defaults = self.defaults.len(),
            overrides = overrides.len(),
            forwarded = params.len(),
            "Forwarding completion request"
        );

        self.client.create(params).await
    }

    /// The `chat` namespace, for clients shaped like chat completions
    pub fn chat(&self) -> Chat<'_, P>
    where
        P: ChatCompletionsApi,
    {
        Chat { wrapper: self }
    }

    /// The `messages` namespace, for clients shaped like the messages API
    pub fn messages(&self) -> Messages<'_, P>
    where
        P: MessagesApi,
    {
        Messages { wrapper: self }
    }
}

impl<P> Wrapper<P> {
    /// The wrapped client
    pub fn client(&self) -> &P {
        &self.client
    }

    /// The stored default parameters
    pub fn defaults(&self) -> &Parameters {
        &self.defaults
    }

    /// Add or replace one default and return the wrapper
    #[must_use]
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key, value);
        self
    }

    /// Add or replace one default
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.defaults.insert(key, value)
    }

    /// Remove one default
    pub fn remove_default(&mut self, key: &str) -> Option<Value> {
        self.defaults.remove(key)
    }

    /// Replace all defaults
    pub fn set_defaults(&mut self, defaults: impl Into<Parameters>) {
        self.defaults = defaults.into();
    }

    /// Take the wrapper apart
    pub fn into_parts(self) -> (P, Parameters) {
        (self.client, self.defaults)
    }
}

#[async_trait]
impl<P: CompletionProvider> CompletionProvider for Wrapper<P> {
    type Response = P::Response;
    type Error = P::Error;

    fn name(&self) -> &str {
        self.client.name()
    }

    async fn create(&self, params: Parameters) -> Result<Self::Response, Self::Error> {
        Wrapper::create(self, params).await
    }
}

impl<P: ChatCompletionsApi> ChatCompletionsApi for Wrapper<P> {}

impl<P: MessagesApi> MessagesApi for Wrapper<P> {}

/// `wrapper.chat()`
#[derive(Debug, Clone, Copy)]
pub struct Chat<'a, P> {
    wrapper: &'a Wrapper<P>,
}

impl<'a, P: ChatCompletionsApi> Chat<'a, P> {
    /// `wrapper.chat().completions()`
    pub fn completions(&self) -> Completions<'a, P> {
        Completions {
            wrapper: self.wrapper,
        }
    }
}

/// `wrapper.chat().completions()`
#[derive(Debug, Clone, Copy)]
pub struct Completions<'a, P> {
    wrapper: &'a Wrapper<P>,
}

impl<P: ChatCompletionsApi> Completions<'_, P> {
    /// Same as [`Wrapper::create`]
    pub async fn create(&self, overrides: impl Into<Parameters>) -> Result<P::Response, P::Error> {
        self.wrapper.create(overrides).await
    }
}

/// `wrapper.messages()`
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a, P> {
    wrapper: &'a Wrapper<P>,
}

impl<P: MessagesApi> Messages<'_, P> {
    /// Same as [`Wrapper::create`]
    pub async fn create(&self, overrides: impl Into<Parameters>) -> Result<P::Response, P::Error> {
        self.wrapper.create(overrides).await
    }
}
