//! llmwrap - default completion parameters for LLM provider clients
//!
//! Configure the parameters you always send (model, max tokens,
//! temperature, tools, ...) once, then pass only what changes per call. The
//! wrapper merges the two (call values win) and forwards the result to the
//! provider client it wraps.
//!
//! # Quick Start
//!
//! ```no_run
//! # use llmwrap::prelude::*;
//! # #[cfg(feature = "providers")]
//! # use llmwrap::providers::{OpenAI, OpenAIConfig};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), llmwrap::Error> {
//! #     #[cfg(feature = "providers")]
//! #     {
//!     let defaults = Parameters::builder().model("gpt-4o").max_tokens(1000).build();
//!     let client = Wrapper::<OpenAI>::from_config(OpenAIConfig::new("your-api-key"), defaults)?;
//!
//!     let completion = client
//!         .chat()
//!         .completions()
//!         .create(Parameters::builder().messages([Message::user("Hello, world!")]))
//!         .await?;
//!     println!("{completion}");
//! #     }
//! #     Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export core types
pub use llmwrap_core::*;

#[cfg(feature = "providers")]
#[cfg_attr(docsrs, doc(cfg(feature = "providers")))]
pub mod providers {
    //! Provider implementations
    pub use llmwrap_providers::*;
}

/// A wrapper around the OpenAI client
#[cfg(feature = "providers")]
pub type OpenAIWrapper = Wrapper<llmwrap_providers::OpenAI>;

/// A wrapper around the Azure OpenAI client
#[cfg(feature = "providers")]
pub type AzureOpenAIWrapper = Wrapper<llmwrap_providers::AzureOpenAI>;

/// A wrapper around the Anthropic client
#[cfg(feature = "providers")]
pub type AnthropicWrapper = Wrapper<llmwrap_providers::Anthropic>;

/// A wrapper around a client for any OpenAI-compatible server
#[cfg(feature = "providers")]
pub type OpenAICompatibleWrapper = Wrapper<llmwrap_providers::OpenAICompatible>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use llmwrap_core::{
        CompletionProvider, Error, FromConfig, Message, Parameters, Role, ToolSchema, Wrapper,
    };

    #[cfg(feature = "providers")]
    pub use llmwrap_providers::{
        builder::ProviderBuilder, Completion, OpenAIConfig,
    };

    #[cfg(feature = "derive")]
    pub use llmwrap_core::tool_schema;
}
