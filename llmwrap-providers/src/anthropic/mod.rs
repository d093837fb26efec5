//! Anthropic provider implementation

mod config;
mod converter;
pub(crate) mod parser;
mod provider;

pub use config::AnthropicConfig;
pub use converter::MessagesConverter;
pub use provider::Anthropic;
