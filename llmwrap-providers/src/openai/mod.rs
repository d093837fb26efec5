//! OpenAI provider implementation

mod config;
mod converter;
pub(crate) mod parser;
mod provider;

pub use config::OpenAIConfig;
pub use converter::ChatCompletionsConverter;
pub use provider::OpenAI;
