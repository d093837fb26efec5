//! Provider for OpenAI-compatible servers

mod config;
mod provider;

pub use config::CompatibleConfig;
pub use provider::OpenAICompatible;
