//! Provider clients the llmwrap wrapper can sit on
//!
//! Every client here implements [`llmwrap_core::CompletionProvider`] with
//! [`Completion`] as its response and [`llmwrap_core::Error`] as its error,
//! and [`llmwrap_core::FromConfig`] so it can be built by the wrapper.

#![warn(missing_docs)]

pub mod builder;
pub mod completion;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;
pub mod utils;

// Provider implementations
pub mod anthropic;
pub mod azure;
pub mod compatible;
pub mod openai;

// Re-export provider types
pub use anthropic::{Anthropic, AnthropicConfig};
pub use azure::{AzureConfig, AzureOpenAI};
pub use compatible::{CompatibleConfig, OpenAICompatible};
pub use openai::{OpenAI, OpenAIConfig};

pub use builder::ProviderBuilder;
pub use completion::{ApiShape, Completion};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use traits::RequestConverter;
