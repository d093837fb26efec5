//! Azure OpenAI provider implementation

mod config;
mod provider;

pub use config::AzureConfig;
pub use provider::AzureOpenAI;
