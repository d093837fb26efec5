//! The capability a wrapped client must offer

use crate::params::Parameters;
use async_trait::async_trait;
use std::sync::Arc;

/// A client that can create one completion from a set of named parameters
///
/// This is the seam between the wrapper and the provider client it wraps. An
/// implementation receives the fully merged parameters and is responsible for
/// translating them into its native request shape. Its response and error
/// types are handed back to the wrapper's caller untouched.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// What a successful call returns
    type Response: Send;
    /// What a failed call returns
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short provider name used in logs (e.g., "openai")
    fn name(&self) -> &str;

    /// Create a completion from the given parameters
    async fn create(&self, params: Parameters) -> Result<Self::Response, Self::Error>;
}

/// A client that can be constructed from its own configuration
///
/// Construction arguments (API keys, endpoints, ...) live in `Config`; they are
/// kept apart from completion parameters, which belong to the wrapper.
pub trait FromConfig: CompletionProvider + Sized {
    /// Construction arguments for the client
    type Config;

    /// Build the client
    fn from_config(config: Self::Config) -> Result<Self, Self::Error>;
}

/// Marker for clients whose native call path is `chat.completions.create`
pub trait ChatCompletionsApi: CompletionProvider {}

/// Marker for clients whose native call path is `messages.create`
pub trait MessagesApi: CompletionProvider {}

#[async_trait]
impl<P> CompletionProvider for Arc<P>
where
    P: CompletionProvider + ?Sized,
{
    type Response = P::Response;
    type Error = P::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn create(&self, params: Parameters) -> Result<Self::Response, Self::Error> {
        (**self).create(params).await
    }
}

impl<P: ChatCompletionsApi + ?Sized> ChatCompletionsApi for Arc<P> {}

impl<P: MessagesApi + ?Sized> MessagesApi for Arc<P> {}
