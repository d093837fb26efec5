//! Core of llmwrap: default completion parameters layered over a provider client
//!
//! A [`Wrapper`] stores default parameters (model, max tokens, temperature, ...)
//! once and merges them with per-call overrides before forwarding each call to
//! the wrapped [`CompletionProvider`]. The wrapped client's response and error
//! types pass through untouched.

#![warn(missing_docs)]

pub mod error;
pub mod params;
pub mod provider;
pub mod types;
pub mod wrapper;

// Re-export commonly used items
pub use error::{Error, Result};
pub use params::{Parameters, ParametersBuilder};
pub use provider::{ChatCompletionsApi, CompletionProvider, FromConfig, MessagesApi};
pub use types::{
    message::{Message, Role},
    response::{FinishReason, ToolCall, Usage},
    tool::{JsonType, ToolSchema},
};
pub use wrapper::{Chat, Completions, Messages, Wrapper};

// Build a `ToolSchema` from a function signature and its doc comment
#[cfg(feature = "derive")]
pub use llmwrap_derive::tool_schema;
